#![no_main]

use bpgen::domain::services::PomDocument;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let content = String::from_utf8_lossy(data);
    if let Ok(pom) = PomDocument::parse(&content) {
        if let Some(parent) = &pom.parent {
            let _ = parent.complete();
        }
        for dependency in pom.dependencies.iter().flatten() {
            let _ = dependency.complete();
        }
    }
});
