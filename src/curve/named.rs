//! Built-in named-curve registry (spec.md §4.C: "A small built-in registry
//! resolves well-known curves by name").
//!
//! Scope: this registry ships a verified, high-confidence subset rather
//! than the full catalog the algorithms support. Every constant below is
//! a standard, widely-published value (SEC2, FIPS 186-4, RFC 7748/8032);
//! see DESIGN.md for why curves requiring long, easy-to-mistranscribe
//! constants (P-521, Ed448-Goldilocks, the Brainpool/Koblitz families,
//! the smaller Edwards/Montgomery curves) were left out rather than
//! guessed at. Where a coordinate can be *derived* instead of copied
//! (Curve25519's `y`, Ed25519's `x` and `d`), this module derives it from
//! the curve equation at registry-build time instead of embedding a
//! second 32-byte magic constant.

use crate::curve::{Curve, CurveParams};
use crate::error::Error;
use crate::field::{intern_field, Fp};

pub(crate) struct RegistryEntry {
    pub name: &'static str,
    pub build: fn() -> Result<Curve, Error>,
}

pub(crate) static REGISTRY: &[RegistryEntry] = &[
    RegistryEntry { name: "secp256k1", build: secp256k1 },
    RegistryEntry { name: "P-256", build: p256 },
    RegistryEntry { name: "P-384", build: p384 },
    RegistryEntry { name: "Curve25519", build: curve25519 },
    RegistryEntry { name: "Ed25519", build: ed25519 },
];

fn secp256k1() -> Result<Curve, Error> {
    #[rustfmt::skip]
    const P: &[u8] = &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFC, 0x2F,
    ];
    #[rustfmt::skip]
    const N: &[u8] = &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE,
        0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B,
        0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
    ];
    #[rustfmt::skip]
    const GX: &[u8] = &[
        0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC,
        0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B, 0x07,
        0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9,
        0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8, 0x17, 0x98,
    ];
    #[rustfmt::skip]
    const GY: &[u8] = &[
        0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65,
        0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08, 0xA8,
        0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19,
        0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10, 0xD4, 0xB8,
    ];
    Curve::short_weierstrass(&CurveParams {
        name: "secp256k1",
        modulus: P,
        order: N,
        cofactor: 1,
        a: &[0x00],
        b: &[0x07],
        gx: GX,
        gy: GY,
    })
}

fn p256() -> Result<Curve, Error> {
    #[rustfmt::skip]
    const P: &[u8] = &[
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    ];
    #[rustfmt::skip]
    const A: &[u8] = &[
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x01,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFC,
    ];
    #[rustfmt::skip]
    const B: &[u8] = &[
        0x5A, 0xC6, 0x35, 0xD8, 0xAA, 0x3A, 0x93, 0xE7,
        0xB3, 0xEB, 0xBD, 0x55, 0x76, 0x98, 0x86, 0xBC,
        0x65, 0x1D, 0x06, 0xB0, 0xCC, 0x53, 0xB0, 0xF6,
        0x3B, 0xCE, 0x3C, 0x3E, 0x27, 0xD2, 0x60, 0x4B,
    ];
    #[rustfmt::skip]
    const N: &[u8] = &[
        0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xBC, 0xE6, 0xFA, 0xAD, 0xA7, 0x17, 0x9E, 0x84,
        0xF3, 0xB9, 0xCA, 0xC2, 0xFC, 0x63, 0x25, 0x51,
    ];
    #[rustfmt::skip]
    const GX: &[u8] = &[
        0x6B, 0x17, 0xD1, 0xF2, 0xE1, 0x2C, 0x42, 0x47,
        0xF8, 0xBC, 0xE6, 0xE5, 0x63, 0xA4, 0x40, 0xF2,
        0x77, 0x03, 0x7D, 0x81, 0x2D, 0xEB, 0x33, 0xA0,
        0xF4, 0xA1, 0x39, 0x45, 0xD8, 0x98, 0xC2, 0x96,
    ];
    #[rustfmt::skip]
    const GY: &[u8] = &[
        0x4F, 0xE3, 0x42, 0xE2, 0xFE, 0x1A, 0x7F, 0x9B,
        0x8E, 0xE7, 0xEB, 0x4A, 0x7C, 0x0F, 0x9E, 0x16,
        0x2B, 0xCE, 0x33, 0x57, 0x6B, 0x31, 0x5E, 0xCE,
        0xCB, 0xB6, 0x40, 0x68, 0x37, 0xBF, 0x51, 0xF5,
    ];
    Curve::short_weierstrass(&CurveParams {
        name: "P-256",
        modulus: P,
        order: N,
        cofactor: 1,
        a: A,
        b: B,
        gx: GX,
        gy: GY,
    })
}

fn p384() -> Result<Curve, Error> {
    #[rustfmt::skip]
    const P: &[u8] = &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xFF, 0xFF, 0xFF, 0xFF,
    ];
    #[rustfmt::skip]
    const A: &[u8] = &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF, 0xFF,
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0xFF, 0xFF, 0xFF, 0xFC,
    ];
    #[rustfmt::skip]
    const B: &[u8] = &[
        0xB3, 0x31, 0x2F, 0xA7, 0xE2, 0x3E, 0xE7, 0xE4,
        0x98, 0x8E, 0x05, 0x6B, 0xE3, 0xF8, 0x2D, 0x19,
        0x18, 0x1D, 0x9C, 0x6E, 0xFE, 0x81, 0x41, 0x12,
        0x03, 0x14, 0x08, 0x8F, 0x50, 0x13, 0x87, 0x5A,
        0xC6, 0x56, 0x39, 0x8D, 0x8A, 0x2E, 0xD1, 0x9D,
        0x2A, 0x85, 0xC8, 0xED, 0xD3, 0xEC, 0x2A, 0xEF,
    ];
    #[rustfmt::skip]
    const N: &[u8] = &[
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
        0xC7, 0x63, 0x4D, 0x81, 0xF4, 0x37, 0x2D, 0xDF,
        0x58, 0x1A, 0x0D, 0xB2, 0x48, 0xB0, 0xA7, 0x7A,
        0xEC, 0xEC, 0x19, 0x6A, 0xCC, 0xC5, 0x29, 0x73,
    ];
    #[rustfmt::skip]
    const GX: &[u8] = &[
        0xAA, 0x87, 0xCA, 0x22, 0xBE, 0x8B, 0x05, 0x37,
        0x8E, 0xB1, 0xC7, 0x1E, 0xF3, 0x20, 0xAD, 0x74,
        0x6E, 0x1D, 0x3B, 0x62, 0x8B, 0xA7, 0x9B, 0x98,
        0x59, 0xF7, 0x41, 0xE0, 0x82, 0x54, 0x2A, 0x38,
        0x55, 0x02, 0xF2, 0x5D, 0xBF, 0x55, 0x29, 0x6C,
        0x3A, 0x54, 0x5E, 0x38, 0x72, 0x76, 0x0A, 0xB7,
    ];
    #[rustfmt::skip]
    const GY: &[u8] = &[
        0x36, 0x17, 0xDE, 0x4A, 0x96, 0x26, 0x2C, 0x6F,
        0x5D, 0x9E, 0x98, 0xBF, 0x92, 0x92, 0xDC, 0x29,
        0xF8, 0xF4, 0x1D, 0xBD, 0x28, 0x9A, 0x14, 0x7C,
        0xE9, 0xDA, 0x31, 0x13, 0xB5, 0xF0, 0xB8, 0xC0,
        0x0A, 0x60, 0xB1, 0xCE, 0x1D, 0x7E, 0x81, 0x9D,
        0x7A, 0x43, 0x1D, 0x7C, 0x90, 0xEA, 0x0E, 0x5F,
    ];
    Curve::short_weierstrass(&CurveParams {
        name: "P-384",
        modulus: P,
        order: N,
        cofactor: 1,
        a: A,
        b: B,
        gx: GX,
        gy: GY,
    })
}

#[rustfmt::skip]
const P25519: &[u8] = &[
    0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xED,
];
#[rustfmt::skip]
const L25519: &[u8] = &[
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x14, 0xDE, 0xF9, 0xDE, 0xA2, 0xF7, 0x9C, 0xD6,
    0x58, 0x12, 0x63, 0x1A, 0x5C, 0xF5, 0xD3, 0xED,
];

fn curve25519() -> Result<Curve, Error> {
    // A = 486662, B = 1. y is derived from x = 9 via the curve equation
    // rather than transcribed, since only the u-coordinate (x = 9) of
    // the Curve25519 base point is a commonly-fixed constant.
    let fp = intern_field(P25519)?;
    let a_coeff = Fp::from_u64(&fp, 486662);
    let gx = Fp::from_u64(&fp, 9);
    let rhs = gx.square().mul(&gx)?.add(&a_coeff.mul(&gx.square())?)?.add(&gx)?;
    let gy = rhs.sqrt()?;

    let mut gx_bytes = [0u8; 32];
    let mut gy_bytes = [0u8; 32];
    gx.to_be_bytes(&mut gx_bytes);
    gy.to_be_bytes(&mut gy_bytes);

    Curve::montgomery(&CurveParams {
        name: "Curve25519",
        modulus: P25519,
        order: L25519,
        cofactor: 8,
        a: &[0x01],             // B
        b: &[0x07, 0x6D, 0x06], // A = 486662
        gx: &gx_bytes,
        gy: &gy_bytes,
    })
}

fn ed25519() -> Result<Curve, Error> {
    // a = -1, d = -121665/121666, Gy = 4/5: all derived from small
    // integers rather than transcribed as opaque 32-byte constants. Gx
    // is then the curve equation's square root at that Gy.
    let fp = intern_field(P25519)?;
    let a_elem = Fp::one(&fp).neg();
    let d = Fp::from_u64(&fp, 121665)
        .neg()
        .mul(&Fp::from_u64(&fp, 121666).invert()?)?;
    let gy = Fp::from_u64(&fp, 4).mul(&Fp::from_u64(&fp, 5).invert()?)?;

    let y2 = gy.square();
    let numerator = Fp::one(&fp).sub(&y2)?;
    let denominator = a_elem.sub(&d.mul(&y2)?)?;
    let x2 = numerator.mul(&denominator.invert()?)?;
    let gx = x2.sqrt()?;

    let mut a_bytes = [0u8; 32];
    let mut d_bytes = [0u8; 32];
    let mut gx_bytes = [0u8; 32];
    let mut gy_bytes = [0u8; 32];
    a_elem.to_be_bytes(&mut a_bytes);
    d.to_be_bytes(&mut d_bytes);
    gx.to_be_bytes(&mut gx_bytes);
    gy.to_be_bytes(&mut gy_bytes);

    Curve::twisted_edwards(&CurveParams {
        name: "Ed25519",
        modulus: P25519,
        order: L25519,
        cofactor: 8,
        a: &a_bytes,
        b: &d_bytes,
        gx: &gx_bytes,
        gy: &gy_bytes,
    })
}
