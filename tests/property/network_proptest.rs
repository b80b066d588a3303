//! Property-based tests for preferred address selection

use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use proptest::prelude::*;
use localfetch::shared::select_preferred;

fn any_ip() -> impl Strategy<Value = IpAddr> {
    prop_oneof![
        any::<[u8; 4]>().prop_map(|o| IpAddr::V4(Ipv4Addr::from(o))),
        (any::<u8>(), any::<u8>()).prop_map(|(c, d)| IpAddr::V4(Ipv4Addr::new(192, 168, c, d))),
        any::<u8>().prop_map(|d| IpAddr::V4(Ipv4Addr::new(127, 0, 0, d))),
        any::<[u8; 16]>().prop_map(|o| IpAddr::V6(Ipv6Addr::from(o))),
    ]
}

proptest! {
    #[test]
    fn test_preferred_is_listed(candidates in prop::collection::vec(any_ip(), 0..12)) {
        let addresses = select_preferred(candidates);
        prop_assert!(addresses.all.contains(&addresses.preferred));
        prop_assert!(!addresses.others().contains(&addresses.preferred));
    }

    #[test]
    fn test_only_usable_ipv4_listed(candidates in prop::collection::vec(any_ip(), 0..12)) {
        let addresses = select_preferred(candidates);
        if addresses.is_loopback_only() {
            prop_assert_eq!(addresses.all, vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);
        } else {
            for ip in &addresses.all {
                prop_assert!(ip.is_ipv4());
                prop_assert!(!ip.is_loopback());
                prop_assert!(!ip.is_unspecified());
            }
        }
    }

    #[test]
    fn test_all_sorted_and_unique(candidates in prop::collection::vec(any_ip(), 0..12)) {
        let addresses = select_preferred(candidates);
        prop_assert!(addresses.all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_lan_address_wins(
        mut candidates in prop::collection::vec(any_ip(), 0..8),
        c in any::<u8>(),
        d in any::<u8>(),
    ) {
        candidates.push(IpAddr::V4(Ipv4Addr::new(192, 168, c, d)));
        let addresses = select_preferred(candidates);
        match addresses.preferred {
            IpAddr::V4(v4) => prop_assert_eq!(&v4.octets()[..2], &[192, 168]),
            IpAddr::V6(_) => prop_assert!(false, "IPv6 preferred"),
        }
    }
}
