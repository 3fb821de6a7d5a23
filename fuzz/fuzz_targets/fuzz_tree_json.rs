#![no_main]

use bpgen::domain::ports::NoopEventSink;
use bpgen::domain::services::DependencyGraphBuilder;
use bpgen::ResolvedTree;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Any tree that parses must also plan without panicking.
        if let Ok(tree) = ResolvedTree::from_json(content) {
            let _ = DependencyGraphBuilder::new().plan(&tree, &NoopEventSink);
        }
    }
});
