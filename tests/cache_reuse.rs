use furc::{select_bucket, select_bucket_with_cache, BitstreamCache, Result};

#[test]
fn shared_cache_matches_fresh_caches() -> Result<()> {
    let mut cache = BitstreamCache::new();

    // Same key, different pool sizes, no reset in between: the underlying
    // bit stream is identical, so the cache may be shared
    for pool_size in [2, 100, 101, 8_192, 50, 1_000_000] {
        let shared = select_bucket_with_cache(b"user:42", pool_size, &mut cache)?;
        let fresh = select_bucket(b"user:42", pool_size)?;

        assert_eq!(fresh, shared);
    }

    Ok(())
}

#[test]
fn reset_cache_is_as_good_as_new() -> Result<()> {
    let mut cache = BitstreamCache::new();

    let _ = select_bucket_with_cache(b"first key", 1_000, &mut cache)?;

    cache.reset();

    let recycled = select_bucket_with_cache(b"second key", 1_000, &mut cache)?;
    let fresh = select_bucket(b"second key", 1_000)?;

    assert_eq!(fresh, recycled);

    Ok(())
}

#[test]
fn cache_survives_many_rounds() -> Result<()> {
    let mut cache = BitstreamCache::new();

    for i in 0..100u32 {
        let key = format!("round-robin-{i}");
        cache.reset();

        for pool_size in [3, 47, 1_024, 9_999] {
            let cached = select_bucket_with_cache(key.as_bytes(), pool_size, &mut cache)?;
            let fresh = select_bucket(key.as_bytes(), pool_size)?;

            assert_eq!(fresh, cached);
        }
    }

    Ok(())
}
