use certext_rdn::{
    display_name_for_oid, display_names, oid_for_display_name, RdnRegistry, RDN_ATTRIBUTES,
};

const EXPECTED_ORDER: [&str; 17] = [
    "CN", "OU", "O", "L", "ST", "C", "E", "SN", "GIVENNAME", "SURNAME", "DC", "UID", "INN",
    "OGRN", "OGRNIP", "SNILS", "STREET",
];

#[test]
fn display_names_follow_table_order() {
    let names = display_names();
    assert_eq!(names.len(), 17);
    for (name, short) in names.iter().zip(EXPECTED_ORDER) {
        let attr = RdnRegistry::global().attribute_for_short_name(short).unwrap();
        assert_eq!(*name, attr.display_name);
    }
}

#[test]
fn display_names_are_stable_across_calls() {
    let first = display_names();
    for _ in 0..5 {
        assert_eq!(display_names(), first);
    }
}

#[test]
fn common_name_label() {
    assert_eq!(display_name_for_oid("2.5.4.3"), "Common Name (CN)");
}

#[test]
fn unknown_oid_falls_back_to_itself() {
    assert_eq!(display_name_for_oid("9.9.9.9"), "9.9.9.9");
    assert_eq!(display_name_for_oid("not an oid"), "not an oid");
    assert_eq!(display_name_for_oid(""), "");
}

#[test]
fn unknown_label_has_no_oid() {
    assert_eq!(oid_for_display_name("Common Name"), None);
    assert_eq!(oid_for_display_name("common name (cn)"), None);
    assert_eq!(oid_for_display_name(""), None);
}

#[test]
fn mapping_is_bijective() {
    for name in display_names() {
        let oid = oid_for_display_name(name).unwrap();
        assert_eq!(display_name_for_oid(&oid.to_string()), name);
    }
}

#[test]
fn well_known_oids() {
    let cases = [
        ("Email (E)", "1.2.840.113549.1.9.1"),
        ("Domain Component (DC)", "0.9.2342.19200300.100.1.25"),
        ("INN", "1.2.643.3.131.1.1"),
        ("OGRN", "1.2.643.100.1"),
        ("SNILS", "1.2.643.100.3"),
        ("OGRNIP", "1.2.643.100.5"),
        ("Street (STREET)", "2.5.4.9"),
    ];
    for (label, oid) in cases {
        assert_eq!(oid_for_display_name(label).unwrap().to_string(), oid);
    }
}

#[test]
fn global_is_a_single_instance() {
    let a: *const RdnRegistry = RdnRegistry::global();
    let b: *const RdnRegistry = RdnRegistry::global();
    assert_eq!(a, b);
}

#[test]
fn global_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| RdnRegistry::global() as *const RdnRegistry as usize))
        .collect();
    let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(addrs.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn attributes_expose_the_table() {
    assert_eq!(RdnRegistry::global().attributes(), &RDN_ATTRIBUTES[..]);
}
