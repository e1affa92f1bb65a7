use furc::{maximum_pool_size, select_bucket, Result};
use rand::RngCore;

#[test]
fn bucket_is_always_in_range() -> Result<()> {
    let mut rng = rand::rng();

    let mut key = [0u8; 16];

    for pool_size in [1, 2, 3, 5, 64, 100, 1_000, 8_192, 100_000, maximum_pool_size()] {
        for _ in 0..1_000 {
            rng.fill_bytes(&mut key);

            let bucket = select_bucket(&key, pool_size)?;
            assert!(bucket < pool_size.max(1));
        }
    }

    Ok(())
}

#[test]
fn key_length_does_not_matter() -> Result<()> {
    // 0 up to a few hundred bytes, crossing every tail-length case
    for len in 0..300 {
        let key = vec![0xab; len];

        let bucket = select_bucket(&key, 1_000)?;
        assert!(bucket < 1_000);
    }

    Ok(())
}

#[test]
fn repeated_calls_agree() -> Result<()> {
    for i in 0..1_000u32 {
        let key = format!("item{i}");

        let first = select_bucket(key.as_bytes(), 500)?;
        let second = select_bucket(key.as_bytes(), 500)?;

        assert_eq!(first, second);
    }

    Ok(())
}
