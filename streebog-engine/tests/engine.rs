#![cfg(feature = "alloc")]

use hex_literal::hex;
use streebog_engine::{
    DigestEngine, Error, NonSnapshotDigest, NullDigest, SnapshotDigest, Streebog256, Streebog512,
};

const EMPTY_256: [u8; 32] = hex!("3f539a213e97c802cc229d474c6aa32a825a360b2a933a949fd925208d9ce1bb");
const EMPTY_512: [u8; 64] = hex!("
    8e945da209aa869f0455928529bcae4679e9873ab707b55315f56ceb98bef0a7
    362f715528356ee83cda5f2aac4c6ad2ba3a715c1bcd81cb8e9f90bf4c1c1a8a
");
const M1: &[u8] = b"012345678901234567890123456789012345678901234567890123456789012";
const M1_256: [u8; 32] = hex!("9d151eefd8590b89daa6ba6cb74af9275dd051026bb149a452fd84e5e57b5500");

fn sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 + 7) as u8).collect()
}

fn finish<D: DigestEngine>(d: &mut D) -> Vec<u8> {
    let mut out = vec![0u8; d.output_size()];
    let n = d.finalize_at(&mut out, 0).unwrap();
    assert_eq!(n, out.len());
    out
}

fn one_shot<D: DigestEngine + Default>(input: &[u8]) -> Vec<u8> {
    let mut d = D::default();
    d.update_slice(input);
    finish(&mut d)
}

#[test]
fn metadata() {
    let d256 = Streebog256::default();
    let d512 = Streebog512::default();
    assert_eq!(d256.algorithm_name(), "Streebog256");
    assert_eq!(d512.algorithm_name(), "Streebog512");
    assert_eq!(d256.output_size(), 32);
    assert_eq!(d512.output_size(), 64);
    assert_eq!(d256.block_size(), 64);
    assert_eq!(d512.block_size(), 64);
}

#[test]
fn chunking_does_not_change_digest() {
    let data = sample(300);
    let expected = one_shot::<Streebog512>(&data);

    let mut bytewise = Streebog512::default();
    for &b in &data {
        bytewise.update_byte(b);
    }
    assert_eq!(finish(&mut bytewise), expected);

    for split in [0, 1, 63, 64, 65, 128, 299, 300] {
        let mut d = Streebog512::default();
        d.update_bulk(&data, 0, split).unwrap();
        d.update_bulk(&data, split, data.len() - split).unwrap();
        assert_eq!(finish(&mut d), expected, "split at {}", split);
    }
}

#[test]
fn finalize_writes_exactly_output_size_at_offset() {
    let mut d = Streebog256::default();
    d.update_slice(M1);
    let mut out = [0xaau8; 40];
    assert_eq!(d.finalize_at(&mut out, 4), Ok(32));
    assert_eq!(out[..4], [0xaa; 4]);
    assert_eq!(out[4..36], M1_256);
    assert_eq!(out[36..], [0xaa; 4]);
}

#[test]
fn finalize_resets_to_fresh_state() {
    let mut d256 = Streebog256::default();
    d256.update_slice(M1);
    finish(&mut d256);
    assert_eq!(finish(&mut d256), EMPTY_256);

    let mut d512 = Streebog512::default();
    d512.update_slice(&sample(77));
    finish(&mut d512);
    assert_eq!(finish(&mut d512), EMPTY_512);
}

#[test]
fn reset_discards_input() {
    let mut d = Streebog512::default();
    d.update_slice(&sample(90));
    d.reset_engine();
    d.reset_engine();
    assert_eq!(finish(&mut d), EMPTY_512);
}

#[test]
fn invalid_range_is_rejected_without_absorbing() {
    let data = sample(10);
    let mut d = Streebog256::default();
    assert_eq!(
        d.update_bulk(&data, 8, 3),
        Err(Error::InvalidRange {
            offset: 8,
            len: 3,
            available: 10,
        })
    );
    assert!(matches!(
        d.update_bulk(&data, usize::MAX, 2),
        Err(Error::InvalidRange { .. })
    ));
    assert_eq!(finish(&mut d), EMPTY_256);
}

#[test]
fn short_output_buffer_is_rejected_and_state_kept() {
    let mut d = Streebog256::default();
    d.update_slice(M1);
    let mut out = [0u8; 40];
    assert_eq!(
        d.finalize_at(&mut out, 9),
        Err(Error::InsufficientOutputSpace {
            offset: 9,
            required: 32,
            available: 40,
        })
    );
    assert!(d.finalize_at(&mut out, usize::MAX).is_err());
    assert_eq!(d.finalize_at(&mut out, 8), Ok(32));
    assert_eq!(out[8..], M1_256);
}

#[test]
fn snapshot_branches_are_independent() {
    let data = sample(200);
    for prefix in [0, 5, 64, 100] {
        let (p, rest) = data.split_at(prefix);
        let (suffix_a, suffix_b) = rest.split_at(rest.len() / 2);

        let mut source = Streebog256::default();
        source.update_slice(p);
        let mut copy = source.snapshot();

        source.update_slice(suffix_a);
        copy.update_slice(suffix_b);

        assert_eq!(finish(&mut source), one_shot::<Streebog256>(&[p, suffix_a].concat()));
        assert_eq!(finish(&mut copy), one_shot::<Streebog256>(&[p, suffix_b].concat()));
    }
}

#[test]
fn immediate_snapshot_finalizes_like_source() {
    let mut source = Streebog512::default();
    source.update_slice(&sample(70));
    let mut copy = source.snapshot();
    assert_eq!(finish(&mut copy), finish(&mut source));
}

#[test]
fn restore_copies_state() {
    let mut saved = Streebog512::default();
    saved.update_slice(b"saved state");

    let mut d = Streebog512::default();
    d.update_slice(&sample(130));
    d.restore(&saved);
    d.update_slice(b" and more");

    let expected = one_shot::<Streebog512>(b"saved state and more");
    assert_eq!(finish(&mut d), expected);
    // the source is untouched by the restore
    assert_eq!(finish(&mut saved), one_shot::<Streebog512>(b"saved state"));
}

#[test]
fn works_through_trait_objects() {
    let mut engines: Vec<Box<dyn DigestEngine>> = vec![
        Box::new(Streebog256::default()),
        Box::new(Streebog512::default()),
        Box::new(NonSnapshotDigest::new(Streebog256::default())),
    ];
    for engine in engines.iter_mut() {
        engine.update_slice(M1);
    }
    let outs: Vec<Vec<u8>> = engines.iter_mut().map(finish).collect();
    assert_eq!(outs[0], M1_256);
    assert_eq!(outs[1].len(), 64);
    assert_eq!(outs[2], M1_256);
}

#[test]
fn non_snapshot_wrapper_forwards_everything() {
    let mut wrapped = NonSnapshotDigest::new(Streebog512::default());
    assert_eq!(wrapped.algorithm_name(), "Streebog512");
    assert_eq!(wrapped.output_size(), 64);
    assert_eq!(wrapped.block_size(), 64);

    let data = sample(150);
    wrapped.update_byte(data[0]);
    wrapped.update_bulk(&data, 1, data.len() - 1).unwrap();
    assert_eq!(finish(&mut wrapped), one_shot::<Streebog512>(&data));

    wrapped.update_slice(b"discarded");
    wrapped.reset_engine();
    assert_eq!(finish(&mut wrapped), EMPTY_512);

    let mut out = [0u8; 63];
    assert!(matches!(
        wrapped.finalize_at(&mut out, 0),
        Err(Error::InsufficientOutputSpace { .. })
    ));
}

#[test]
fn non_snapshot_wrapper_requires_inner_digest() {
    assert_eq!(
        NonSnapshotDigest::<Streebog256>::try_new(None).err(),
        Some(Error::InvalidArgument)
    );
    let wrapped = NonSnapshotDigest::try_new(Some(Streebog256::default())).unwrap();
    assert_eq!(wrapped.into_inner().output_size(), 32);
}

#[test]
fn wrapper_over_borrowed_engine() {
    let mut inner = Streebog256::default();
    {
        let mut wrapped = NonSnapshotDigest::new(&mut inner);
        wrapped.update_slice(&M1[..30]);
    }
    inner.update_slice(&M1[30..]);
    assert_eq!(finish(&mut inner), M1_256);
}

#[test]
fn null_digest_returns_input_verbatim() {
    for len in [0, 1, 63, 64, 65, 257] {
        let data = sample(len);
        let mut d = NullDigest::new();
        assert_eq!(d.algorithm_name(), "NULL");
        assert_eq!(d.block_size(), 0);

        d.update_slice(&data);
        assert_eq!(d.output_size(), len);

        let mut out = vec![0u8; len];
        assert_eq!(d.finalize_at(&mut out, 0), Ok(len));
        assert_eq!(out, data);

        assert_eq!(d.output_size(), 0);
        assert_eq!(d.finalize_at(&mut out, 0), Ok(0));
    }
}

#[test]
fn null_digest_mixed_updates_and_reset() {
    let mut d = NullDigest::default();
    d.update_byte(b'x');
    d.update_bulk(b"--abc--", 2, 3).unwrap();
    assert!(d.update_bulk(b"abc", 2, 2).is_err());
    assert_eq!(d.output_size(), 4);

    let mut out = [0u8; 6];
    assert_eq!(d.finalize_at(&mut out, 2), Ok(4));
    assert_eq!(&out[2..], b"xabc");

    d.update_slice(b"gone");
    d.reset_engine();
    assert_eq!(d.output_size(), 0);
}
