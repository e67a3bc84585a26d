use chrono::{DateTime, Duration, TimeZone, Utc};
use fpi2nite_streams::{Error, Extractor, FailurePolicy};
use fpi2nite_testing::{FakeIndex, PacketBuilder, asassn_packet, fermi_packet, swift_packet};
use fpi2nite_types::StreamKind;

const SWIFT_1: &str = "ivo://nasa.gsfc.gcn/SWIFT#BAT_GRB_Pos_1060430-259";
const SWIFT_2: &str = "ivo://nasa.gsfc.gcn/SWIFT#BAT_GRB_Pos_1060455-260";
const SWIFT_3: &str = "ivo://nasa.gsfc.gcn/SWIFT#BAT_GRB_Pos_1060499-261";
const FERMI_1: &str = "ivo://nasa.gsfc.gcn/Fermi#GBM_Fin_Pos2021-09-10T01:02:03.00_652928000_0-123";
const FERMI_2: &str = "ivo://nasa.gsfc.gcn/Fermi#GBM_Fin_Pos2021-09-10T05:06:07.00_652942000_0-124";
const ASASSN_1: &str = "ivo://asassn.osu/ASASSN#ASASSN-21xy_2021-09-10";

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 9, 11, 12, 0, 0).unwrap()
}

fn recent() -> DateTime<Utc> {
    reference() - Duration::days(1)
}

#[test]
fn test_empty_listing_yields_empty_table() -> anyhow::Result<()> {
    let index = FakeIndex::new();
    for kind in StreamKind::ALL {
        let table = Extractor::for_stream(&index, kind).run(7, Some(reference()))?;
        assert!(table.is_empty());
    }
    Ok(())
}

#[test]
fn test_window_starts_ndays_before_reference() -> anyhow::Result<()> {
    let index = FakeIndex::new()
        .with_packet(
            FERMI_1,
            reference() - Duration::days(6),
            fermi_packet(FERMI_1, "652928000", "2021-09-05T01:02:03.00", "1.0", "2.0"),
        )
        .with_packet(
            FERMI_2,
            reference() - Duration::days(8),
            fermi_packet(FERMI_2, "652942000", "2021-09-03T05:06:07.00", "3.0", "4.0"),
        );

    let table = Extractor::for_stream(&index, StreamKind::Fermi).run(7, Some(reference()))?;
    let names: Vec<_> = table.names().collect();
    assert_eq!(names, vec!["FermiGBM-652928000"]);

    let filters = index.requested_filters();
    assert_eq!(filters.len(), 1);
    assert_eq!(filters[0].authored_since, reference() - Duration::days(7));
    assert_eq!(filters[0].role, "observation");
    assert_eq!(filters[0].stream_tag.as_deref(), Some("nasa.gsfc.gcn/Fermi"));
    assert_eq!(filters[0].ivorn_substring, "GBM_Fin_Pos");
    Ok(())
}

#[test]
fn test_shifting_reference_keeps_window_width() -> anyhow::Result<()> {
    let index = FakeIndex::new();
    let later = reference() + Duration::days(30);
    Extractor::for_stream(&index, StreamKind::Swift).run(7, Some(reference()))?;
    Extractor::for_stream(&index, StreamKind::Swift).run(7, Some(later))?;

    let filters = index.requested_filters();
    assert_eq!(filters[1].authored_since - filters[0].authored_since, Duration::days(30));
    Ok(())
}

#[test]
fn test_fermi_distinct_trigger_ids() -> anyhow::Result<()> {
    let index = FakeIndex::new()
        .with_packet(
            FERMI_1,
            recent(),
            fermi_packet(FERMI_1, "652928000", "2021-09-10T01:02:03.00", "123.45", "-45.67"),
        )
        .with_packet(
            FERMI_2,
            recent(),
            fermi_packet(FERMI_2, "652942000", "2021-09-10T05:06:07.00", "12.5", "33.1"),
        );

    let table = Extractor::for_stream(&index, StreamKind::Fermi).run(7, Some(reference()))?;

    assert_eq!(table.len(), 2);
    let record = table.get("FermiGBM-652928000").expect("first trigger");
    assert_eq!(record.isot, "2021-09-10T01:02:03.00");
    assert_eq!(record.ra, "123.45");
    assert_eq!(record.dec, "-45.67");
    assert!(table.contains("FermiGBM-652942000"));
    Ok(())
}

#[test]
fn test_fermi_missing_trig_id_aborts_stream() {
    let xml = PacketBuilder::new(FERMI_1)
        .param("Packet_Type", "115")
        .observed("2021-09-10T01:02:03.00", "1.0", "2.0")
        .build();
    let index = FakeIndex::new().with_packet(FERMI_1, recent(), xml);

    let err = Extractor::for_stream(&index, StreamKind::Fermi)
        .run(7, Some(reference()))
        .unwrap_err();

    assert!(matches!(err, Error::Packet { ref ivorn, .. } if ivorn == FERMI_1));
    assert!(matches!(err.root(), Error::MissingField(_)));
}

#[test]
fn test_swift_same_base_is_disambiguated() -> anyhow::Result<()> {
    let index = FakeIndex::new()
        .with_packet(
            SWIFT_1,
            recent(),
            swift_packet(SWIFT_1, "GRB210911A", "2021-09-11T01:00:00.00", "10.0", "20.0"),
        )
        .with_packet(
            SWIFT_2,
            recent(),
            swift_packet(SWIFT_2, "GRB210911A", "2021-09-11T03:00:00.00", "30.0", "40.0"),
        );

    let table = Extractor::for_stream(&index, StreamKind::Swift).run(7, Some(reference()))?;

    let names: Vec<_> = table.names().collect();
    assert_eq!(names, vec!["GRB210911AA", "GRB210911AB"]);
    assert_eq!(table.get("GRB210911AA").map(|r| r.ra.as_str()), Some("10.0"));
    assert_eq!(table.get("GRB210911AB").map(|r| r.ra.as_str()), Some("30.0"));
    Ok(())
}

#[test]
fn test_swift_spaces_are_stripped_and_null_dropped() -> anyhow::Result<()> {
    // The unnamed trigger has no position; it must be dropped before coordinates are read
    let unnamed = PacketBuilder::new(SWIFT_2)
        .inference_name("GRB null")
        .observed("2021-09-11T02:00:00.00", "0", "0")
        .without_position()
        .build();
    let index = FakeIndex::new()
        .with_packet(
            SWIFT_1,
            recent(),
            swift_packet(SWIFT_1, "GRB 210911", "2021-09-11T01:00:00.00", "10.0", "20.0"),
        )
        .with_packet(SWIFT_2, recent(), unnamed)
        .with_packet(
            SWIFT_3,
            recent(),
            swift_packet(SWIFT_3, "GRB 210911", "2021-09-11T04:00:00.00", "50.0", "60.0"),
        );

    let table = Extractor::for_stream(&index, StreamKind::Swift).run(7, Some(reference()))?;

    let names: Vec<_> = table.names().collect();
    assert_eq!(names, vec!["GRB210911A", "GRB210911B"]);
    assert!(table.names().all(|n| !n.contains("null")));
    Ok(())
}

#[test]
fn test_asassn_prefers_id_other() -> anyhow::Result<()> {
    let xml = asassn_packet(
        ASASSN_1,
        &[("id_assasn", "ASASSN-21xy"), ("id_other", "= AT2021abc")],
        "2021-09-10T08:00:00.00",
        "200.1",
        "-12.3",
    );
    let index = FakeIndex::new().with_packet(ASASSN_1, recent(), xml);

    let table = Extractor::for_stream(&index, StreamKind::Asassn).run(7, Some(reference()))?;

    let names: Vec<_> = table.names().collect();
    assert_eq!(names, vec!["AT2021abc"]);

    let filter = &index.requested_filters()[0];
    assert_eq!(filter.stream_tag, None);
    assert_eq!(filter.ivorn_substring, "ASASSN");
    Ok(())
}

#[test]
fn test_asassn_without_identifier_is_ambiguous() {
    let xml = asassn_packet(ASASSN_1, &[("mag", "16.1")], "2021-09-10T08:00:00.00", "1", "2");
    let index = FakeIndex::new().with_packet(ASASSN_1, recent(), xml);

    let err = Extractor::for_stream(&index, StreamKind::Asassn)
        .run(7, Some(reference()))
        .unwrap_err();
    assert!(matches!(err.root(), Error::AmbiguousName(_)));
}

#[test]
fn test_records_always_have_coordinates() -> anyhow::Result<()> {
    let index = FakeIndex::new()
        .with_packet(
            SWIFT_1,
            recent(),
            swift_packet(SWIFT_1, "GRB 210911", "2021-09-11T01:00:00.00", "10.0", "20.0"),
        )
        .with_packet(
            FERMI_1,
            recent(),
            fermi_packet(FERMI_1, "652928000", "2021-09-10T01:02:03.00", "1.5", "2.5"),
        )
        .with_packet(
            ASASSN_1,
            recent(),
            asassn_packet(
                ASASSN_1,
                &[("id_assasn", "ASASSN-21xy")],
                "2021-09-10T08:00:00.00",
                "200.1",
                "-12.3",
            ),
        );

    for kind in StreamKind::ALL {
        let table = Extractor::for_stream(&index, kind).run(7, Some(reference()))?;
        assert_eq!(table.len(), 1, "{} should yield one event", kind);
        for record in &table {
            assert!(!record.isot.is_empty());
            assert!(!record.ra.is_empty());
            assert!(!record.dec.is_empty());
        }
    }
    Ok(())
}

#[test]
fn test_missing_coordinates_abort_by_default() {
    let xml = PacketBuilder::new(FERMI_1)
        .param("TrigID", "652928000")
        .observed("2021-09-10T01:02:03.00", "1.0", "2.0")
        .without_isot()
        .build();
    let index = FakeIndex::new()
        .with_packet(FERMI_1, recent(), xml)
        .with_packet(
            FERMI_2,
            recent(),
            fermi_packet(FERMI_2, "652942000", "2021-09-10T05:06:07.00", "3.0", "4.0"),
        );

    let err = Extractor::for_stream(&index, StreamKind::Fermi)
        .run(7, Some(reference()))
        .unwrap_err();
    assert!(matches!(err.root(), Error::MissingField(_)));
    // Processing stops at the first bad packet
    assert_eq!(index.fetched(), vec![FERMI_1.to_string()]);
}

#[test]
fn test_skip_packet_policy_continues() -> anyhow::Result<()> {
    let index = FakeIndex::new()
        .with_packet(FERMI_1, recent(), "<VOEvent><What></VOEvent>")
        .with_packet(
            FERMI_2,
            recent(),
            fermi_packet(FERMI_2, "652942000", "2021-09-10T05:06:07.00", "3.0", "4.0"),
        );

    let table = Extractor::for_stream(&index, StreamKind::Fermi)
        .with_failure_policy(FailurePolicy::SkipPacket)
        .run(7, Some(reference()))?;

    let names: Vec<_> = table.names().collect();
    assert_eq!(names, vec!["FermiGBM-652942000"]);
    Ok(())
}

#[test]
fn test_remote_failure_aborts_even_when_skipping() {
    let index = FakeIndex::new()
        .with_packet(
            FERMI_1,
            recent(),
            fermi_packet(FERMI_1, "652928000", "2021-09-10T01:02:03.00", "1.0", "2.0"),
        )
        .failing_fetch(FERMI_1);

    let err = Extractor::for_stream(&index, StreamKind::Fermi)
        .with_failure_policy(FailurePolicy::SkipPacket)
        .run(7, Some(reference()))
        .unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
}

#[test]
fn test_listing_failure_is_surfaced() {
    let index = FakeIndex::new().failing_listing();
    let err = Extractor::for_stream(&index, StreamKind::Swift)
        .run(7, Some(reference()))
        .unwrap_err();
    assert!(matches!(err, Error::Remote(_)));
}

#[test]
fn test_non_observation_packets_are_not_listed() -> anyhow::Result<()> {
    let index = FakeIndex::new().with_role_packet(
        SWIFT_1,
        "test",
        recent(),
        swift_packet(SWIFT_1, "GRB 210911", "2021-09-11T01:00:00.00", "10.0", "20.0"),
    );
    let table = Extractor::for_stream(&index, StreamKind::Swift).run(7, Some(reference()))?;
    assert!(table.is_empty());
    assert!(index.fetched().is_empty());
    Ok(())
}

#[test]
fn test_out_of_range_lookback_fails_before_listing() {
    let index = FakeIndex::new();
    let err = Extractor::for_stream(&index, StreamKind::Swift)
        .run(u32::MAX, Some(reference()))
        .unwrap_err();

    assert!(matches!(err, Error::Window(_)));
    assert!(index.requested_filters().is_empty());
}
