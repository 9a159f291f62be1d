//! Property tests over random traces.

use crate::common::harness::{TestHarness, pages};
use memsim::PolicyKind;
use memsim::common::LogicalAddr;
use memsim::core::mmu::Source;
use proptest::prelude::*;

fn page_trace() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..12, 0..120)
}

fn policy() -> impl Strategy<Value = PolicyKind> {
    prop_oneof![
        Just(PolicyKind::Fifo),
        Just(PolicyKind::Lru),
        Just(PolicyKind::Opt)
    ]
}

proptest! {
    #[test]
    fn opt_never_loses(trace in page_trace(), frames in 1usize..8) {
        let trace = pages(&trace);
        let opt = TestHarness::faults_for(frames, PolicyKind::Opt, &trace);
        let fifo = TestHarness::faults_for(frames, PolicyKind::Fifo, &trace);
        let lru = TestHarness::faults_for(frames, PolicyKind::Lru, &trace);
        prop_assert!(opt <= fifo, "OPT {} > FIFO {}", opt, fifo);
        prop_assert!(opt <= lru, "OPT {} > LRU {}", opt, lru);
    }

    #[test]
    fn counters_add_up(
        raw in prop::collection::vec(any::<u16>(), 0..200),
        frames in 1usize..=256,
        policy in policy(),
    ) {
        let trace: Vec<LogicalAddr> = raw.into_iter().map(LogicalAddr::new).collect();
        let mut h = TestHarness::new(frames, policy);
        let out = h.run(&trace);
        let stats = h.stats();

        prop_assert_eq!(stats.translated, trace.len() as u64);
        prop_assert_eq!(stats.tlb_hits + stats.tlb_misses, stats.translated);
        prop_assert_eq!(stats.page_lookups, stats.tlb_misses);

        let faults = out.iter().filter(|r| r.source == Source::PageFault).count() as u64;
        prop_assert_eq!(stats.page_faults, faults);
        let hits = out.iter().filter(|r| r.source == Source::TlbHit).count() as u64;
        prop_assert_eq!(stats.tlb_hits, hits);
    }

    #[test]
    fn value_matches_frame_bytes(
        raw in prop::collection::vec(any::<u16>(), 1..100),
        frames in 1usize..16,
        policy in policy(),
    ) {
        let trace: Vec<LogicalAddr> = raw.into_iter().map(LogicalAddr::new).collect();
        let mut h = TestHarness::new(frames, policy);
        for res in h.run(&trace) {
            prop_assert!(res.frame < frames);
            prop_assert_eq!(res.value, res.frame_bytes[res.addr.offset() as usize] as i8);
        }
    }

    #[test]
    fn repeat_access_is_tlb_hit(trace in page_trace(), frames in 1usize..8, policy in policy()) {
        let trace = pages(&trace);
        let mut h = TestHarness::new(frames, policy);
        let out = h.run(&trace);
        for pair in out.windows(2) {
            if pair[0].addr.page_number() == pair[1].addr.page_number() {
                prop_assert_eq!(pair[1].source, Source::TlbHit);
            }
        }
    }
}
