use serde::Serialize;

/// Counters collected over a run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SimStats {
    pub translated: u64,
    pub page_faults: u64,
    pub page_lookups: u64,
    pub tlb_hits: u64,
    pub tlb_misses: u64,
}

impl SimStats {
    /// Faults per page-table lookup, 0.0 when nothing was looked up.
    pub fn page_fault_rate(&self) -> f64 {
        ratio(self.page_faults, self.page_lookups)
    }

    /// Hits per TLB access, 0.0 when the TLB was never consulted.
    pub fn tlb_hit_rate(&self) -> f64 {
        ratio(self.tlb_hits, self.tlb_hits + self.tlb_misses)
    }

    pub fn summary(&self) -> String {
        format!(
            "Number of Translated Addresses = {}\n\
             Page Faults = {}\n\
             Page Fault Rate = {:.3}\n\
             TLB Hits = {}\n\
             TLB Misses = {}\n\
             TLB Hit Rate = {:.3}",
            self.translated,
            self.page_faults,
            self.page_fault_rate(),
            self.tlb_hits,
            self.tlb_misses,
            self.tlb_hit_rate(),
        )
    }

    /// Stats as a JSON object, with the derived rates included.
    pub fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(self).unwrap_or_default();
        if let Some(obj) = value.as_object_mut() {
            obj.insert("page_fault_rate".into(), self.page_fault_rate().into());
            obj.insert("tlb_hit_rate".into(), self.tlb_hit_rate().into());
        }
        value
    }
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}
