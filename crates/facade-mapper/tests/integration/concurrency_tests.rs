//! Concurrent use of one mapper instance
//!
//! The host shares a single configured mapper across request threads.

use facade_mapper::{FacadeIssuerMapper, OverrideOutcome, TokenMapper};
use fm_test_utils::*;
use std::sync::Arc;
use std::thread;

#[test]
fn test_shared_mapper_across_threads() -> Result<(), anyhow::Error> {
    let mapper = Arc::new(FacadeIssuerMapper::new(facade_config(FACADE_URL)));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let mapper = Arc::clone(&mapper);
            thread::spawn(move || {
                // Alternate facade and direct requests.
                let headers = if i % 2 == 0 {
                    TestHeadersBuilder::new().from_facade().build()
                } else {
                    TestHeadersBuilder::new().build()
                };
                let mut token = TestTokenBuilder::new().build();
                let outcome = mapper.transform_access_token(&headers, &mut token);
                (i, outcome, token.iss)
            })
        })
        .collect();

    for handle in handles {
        let (i, outcome, issuer) = handle
            .join()
            .map_err(|_| anyhow::anyhow!("worker thread panicked"))?;
        if i % 2 == 0 {
            assert!(outcome.is_overridden());
            assert_eq!(issuer, FACADE_URL);
        } else {
            assert_eq!(outcome, OverrideOutcome::NotFacadeRequest);
            assert_eq!(issuer, HOST_ISSUER);
        }
    }

    Ok(())
}
