use std::collections::BTreeSet;
use std::sync::Arc;

use penguin_dash::data::aggregate::{self, format_mean, Summary};
use penguin_dash::data::loader::read_csv;
use penguin_dash::{FilterError, PenguinDataset, Record, Session, Species};

fn three_penguins() -> Arc<PenguinDataset> {
    Arc::new(PenguinDataset::from_records(vec![
        Record::new(Species::Adelie, "Torgersen", Some(39.1), Some(18.7), Some(3750.0)),
        Record::new(Species::Gentoo, "Biscoe", Some(46.1), Some(13.2), Some(4500.0)),
        Record::new(Species::Chinstrap, "Dream", Some(50.0), None, Some(3800.0)),
    ]))
}

fn species(list: &[Species]) -> BTreeSet<Species> {
    list.iter().copied().collect()
}

#[test]
fn adelie_and_gentoo_under_5000() {
    let mut session = Session::new(three_penguins());
    session
        .set_species_selection(species(&[Species::Adelie, Species::Gentoo]))
        .unwrap();
    session.set_mass_threshold(5000.0).unwrap();

    let snap = session.current();
    assert_eq!(snap.indices(), &[0, 1]);
    assert_eq!(session.count(), 2);
    assert_eq!(session.mean_bill_length(), Some(42.6));
    assert_eq!(session.mean_bill_depth(), Some(16.0));
}

#[test]
fn lowering_threshold_to_4000_keeps_only_adelie() {
    let mut session = Session::new(three_penguins());
    session
        .set_species_selection(species(&[Species::Adelie, Species::Gentoo]))
        .unwrap();
    session.set_mass_threshold(5000.0).unwrap();
    assert_eq!(session.count(), 2);

    session.set_mass_threshold(4000.0).unwrap();
    let snap = session.current();
    let kept: Vec<_> = snap.records().map(|r| r.species).collect();
    assert_eq!(kept, vec![Species::Adelie]);
    assert_eq!(session.count(), 1);
}

#[test]
fn chinstrap_alone_has_no_depth_data() {
    let mut session = Session::new(three_penguins());
    session
        .set_species_selection(species(&[Species::Chinstrap]))
        .unwrap();
    session.set_mass_threshold(6000.0).unwrap();

    assert_eq!(session.count(), 1);
    assert_eq!(session.mean_bill_length(), Some(50.0));
    assert_eq!(session.mean_bill_depth(), None);
    assert_eq!(format_mean(session.mean_bill_depth()), "no data");
    assert!(session.scatter().is_empty());
    assert_eq!(session.grid().len(), 1);
}

#[test]
fn empty_selection_degrades_every_aggregate() {
    let mut session = Session::new(three_penguins());
    session.set_species_selection(BTreeSet::new()).unwrap();

    assert_eq!(
        session.summary(),
        Summary {
            count: 0,
            mean_bill_length: None,
            mean_bill_depth: None,
        }
    );
    assert!(session.scatter().points.is_empty());
    assert!(session.grid().is_empty());
}

#[test]
fn current_is_idempotent_between_mutations() {
    let mut session = Session::new(three_penguins());
    let a = session.current();
    let b = session.current();
    assert!(a.same_pass(&b));
    assert_eq!(a.indices(), b.indices());
    assert_eq!(session.recompute_count(), 1);
}

#[test]
fn threshold_change_is_never_served_stale() {
    let mut session = Session::new(three_penguins());
    assert_eq!(session.count(), 3);

    session.set_mass_threshold(3800.0).unwrap();
    // 3800 itself is excluded by the strict comparison.
    assert_eq!(session.current().indices(), &[0]);

    session.set_mass_threshold(3800.5).unwrap();
    assert_eq!(session.current().indices(), &[0, 2]);
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let mut session = Session::new(three_penguins());
    let err = session.set_mass_threshold(1500.0).unwrap_err();
    assert_eq!(
        err,
        FilterError::ThresholdOutOfRange {
            value: 1500.0,
            min: 2000.0,
            max: 6000.0
        }
    );
    assert_eq!(session.filters().mass_threshold(), 6000.0);
}

#[test]
fn aggregates_agree_with_a_direct_scan() {
    let csv = "\
species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year
Adelie,Torgersen,39.1,18.7,181,3750,male,2007
Adelie,Torgersen,39.5,17.4,186,3800,female,2007
Adelie,Torgersen,40.3,18,195,3250,female,2007
Adelie,Torgersen,NA,NA,NA,NA,NA,2007
Gentoo,Biscoe,46.1,13.2,211,4500,female,2007
Gentoo,Biscoe,50,16.3,230,5700,male,2007
Gentoo,Biscoe,NA,NA,NA,NA,NA,2009
Chinstrap,Dream,46.5,17.9,192,3500,female,2007
Chinstrap,Dream,50,19.5,196,3900,male,2007
";
    let dataset = Arc::new(read_csv(csv.as_bytes()).unwrap());
    let mut session = Session::new(Arc::clone(&dataset));

    for threshold in [2000.0, 3600.0, 3800.0, 4600.0, 6000.0] {
        for selection in [
            vec![],
            vec![Species::Adelie],
            vec![Species::Gentoo, Species::Chinstrap],
            Species::ALL.to_vec(),
        ] {
            let selected = species(&selection);
            session.set_species_selection(selected.clone()).unwrap();
            session.set_mass_threshold(threshold).unwrap();

            let expected: Vec<&Record> = dataset
                .records
                .iter()
                .filter(|r| {
                    selected.contains(&r.species) && r.body_mass_g.is_some_and(|m| m < threshold)
                })
                .collect();

            let snap = session.current();
            let got: Vec<&Record> = snap.records().collect();
            assert_eq!(got, expected, "threshold {threshold}, species {selection:?}");
            assert_eq!(aggregate::count(&snap), expected.len());

            let lengths: Vec<f64> = expected.iter().filter_map(|r| r.bill_length_mm).collect();
            let direct = (!lengths.is_empty()).then(|| {
                let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
                (mean * 10.0).round() / 10.0
            });
            assert_eq!(aggregate::mean_bill_length(&snap), direct);
        }
    }
}
