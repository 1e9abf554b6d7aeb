use digest::dev::fixed_reset_test;
use hex_literal::hex;
use streebog_engine::{Digest, DigestEngine, Streebog256, Streebog512};

/// Example M1 of GOST R 34.11-2012 (63 bytes).
const M1: &[u8] = b"012345678901234567890123456789012345678901234567890123456789012";

/// Example M2 of GOST R 34.11-2012 (72 bytes), in absorption order.
const M2: &[u8] = &hex!("
    d1e520e2e5f2f0e82c20d1f2f0e8e1eee6e820e2edf3f6e82c20e2e5fef2fa20
    f120eceef0ff20f1f2f0e5ebe0ece820ede020f5f0e0e1f0fbff20efebfaeafb
    20c8e3eef0e5e2fb
");

struct Vector {
    input: &'static [u8],
    s256: [u8; 32],
    s512: [u8; 64],
}

const SEQ128: [u8; 128] = {
    let mut buf = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        buf[i] = i as u8;
        i += 1;
    }
    buf
};

#[rustfmt::skip]
const VECTORS: &[Vector] = &[
    Vector {
        input: M1,
        s256: hex!("9d151eefd8590b89daa6ba6cb74af9275dd051026bb149a452fd84e5e57b5500"),
        s512: hex!("
            1b54d01a4af5b9d5cc3d86d68d285462b19abc2475222f35c085122be4ba1ffa
            00ad30f8767b3a82384c6574f024c311e2a481332b08ef7f41797891c1646f48
        "),
    },
    Vector {
        input: M2,
        s256: hex!("9dd2fe4e90409e5da87f53976d7405b0c0cac628fc669a741d50063c557e8f50"),
        s512: hex!("
            1e88e62226bfca6f9994f1f2d51569e0daf8475a3b0fe61a5300eee46d961376
            035fe83549ada2b8620fcd7c496ce5b33f0cb9dddc2b6460143b03dabac9fb28
        "),
    },
    Vector {
        input: b"",
        s256: hex!("3f539a213e97c802cc229d474c6aa32a825a360b2a933a949fd925208d9ce1bb"),
        s512: hex!("
            8e945da209aa869f0455928529bcae4679e9873ab707b55315f56ceb98bef0a7
            362f715528356ee83cda5f2aac4c6ad2ba3a715c1bcd81cb8e9f90bf4c1c1a8a
        "),
    },
    Vector {
        input: b"a",
        s256: hex!("ba31099b9cc84ec2a671e9313572378920a705b363b031a1cb4fc03e01ce8df3"),
        s512: hex!("
            8b2a40ecab7b7496bc4cc0f773595452baf658849b495acc3ba017206810efb0
            0420ccd73fb3297e0f7890941b84ac4a8bc27e3c95e1f97c094609e2136abb7e
        "),
    },
    Vector {
        input: &[0x00],
        s256: hex!("6f7305265dc0937440881f9493ef1260f61a9d47742d369e952d41bdb2a9edd1"),
        s512: hex!("
            c6b638133ba9706410ddf1bea05d40bf7014500d410c0abde17bff0383c1bd36
            3be2da85c428be86ed48c87fb76013622b22b6aa391d6252ce3a65487b1ba9e4
        "),
    },
    Vector {
        input: &[0xff; 64],
        s256: hex!("964a5ab60286f106288743e2fe1a422d160898ca1bd535e831aa500cfe34d7e8"),
        s512: hex!("
            41629de677d7e8090c3cd70affe3300d1e1cfba2db97945ec37feb4e1375bc02
            a53f00370b7d715b07f37f93cac844efadbfd1b85f9ddae3de9656c0e95affc7
        "),
    },
    Vector {
        input: &SEQ128,
        s256: hex!("927285165104e5587233772ce496d96bf108c942f4399986a6bc8e908e9622a4"),
        s512: hex!("
            a8d65e689c89d8cd4616215d14ebfc02993bde3f5c7d7219904d87848ce9249e
            7ce3525ae605d85a3596457c880f938eead974b91f61203d31665ca6f3a1decc
        "),
    },
    Vector {
        input: b"The quick brown fox jumps over the lazy dog",
        s256: hex!("3e7dea7f2384b6c5a3d0e24aaa29c05e89ddd762145030ec22c71a6db8b2c1f4"),
        s512: hex!("
            d2b793a0bb6cb5904828b5b6dcfb443bb8f33efc06ad09368878ae4cdc8245b9
            7e60802469bed1e7c21a64ff0b179a6a1e0bb74d92965450a0adab69162c00fe
        "),
    },
];

#[test]
fn streebog256_main() {
    for (i, v) in VECTORS.iter().enumerate() {
        if let Some(desc) = fixed_reset_test::<Streebog256>(v.input, &v.s256) {
            panic!("\nStreebog256 failed vector #{}: {}", i, desc);
        }
    }
}

#[test]
fn streebog512_main() {
    for (i, v) in VECTORS.iter().enumerate() {
        if let Some(desc) = fixed_reset_test::<Streebog512>(v.input, &v.s512) {
            panic!("\nStreebog512 failed vector #{}: {}", i, desc);
        }
    }
}

#[test]
fn digest_api_one_shot() {
    assert_eq!(Streebog256::digest(M1)[..], VECTORS[0].s256[..]);
    assert_eq!(Streebog512::digest(M1)[..], VECTORS[0].s512[..]);
}

#[test]
fn long_input_crosses_many_blocks() {
    let mut data = [0u8; 1000];
    for (i, b) in data.iter_mut().enumerate() {
        *b = (i % 251) as u8;
    }

    let mut whole = Streebog512::new();
    whole.update(&data[..]);
    let whole = whole.finalize();

    for chunk in [1, 7, 63, 64, 65, 500] {
        let mut h = Streebog512::new();
        for part in data.chunks(chunk) {
            h.update(part);
        }
        assert_eq!(h.finalize(), whole, "chunk size {}", chunk);
    }
}

#[test]
fn contract_and_digest_traits_in_scope_together() {
    let mut d = Streebog512::default();
    d.update(b"0123456789");
    d.update_slice(&M1[10..]);
    let mut out = [0u8; 64];
    assert_eq!(d.finalize_at(&mut out, 0), Ok(64));
    assert_eq!(out, VECTORS[0].s512);

    d.update_slice(b"x");
    d.reset_engine();
    assert_eq!(d.finalize()[..], VECTORS[2].s512[..]);

    let mut d = Streebog256::new();
    assert_eq!(d.output_size(), 32);
    d.update_byte(b'a');
    d.reset_engine();
    d.update_byte(b'a');
    assert_eq!(d.finalize_reset()[..], VECTORS[3].s256[..]);
}
