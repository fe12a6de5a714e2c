//! Literal concrete scenarios from spec.md §8: known compressed-point
//! encodings on `secp256k1` and `Ed25519`.

use ecc_core::curve::by_name;
use ecc_core::point::{curve_ref, Point};

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02X}")).collect()
}

#[test]
fn secp256k1_generator_multiples_match_known_hex() {
    let curve = curve_ref(by_name("secp256k1").unwrap());
    let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();

    assert_eq!(
        to_hex(&g.encode_compressed().unwrap()),
        "0279BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798"
    );

    let two_g = g.double().unwrap();
    assert_eq!(
        to_hex(&two_g.encode_compressed().unwrap()),
        "02C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5"
    );

    let three_g = g.add(&two_g).unwrap();
    assert_eq!(
        to_hex(&three_g.encode_compressed().unwrap()),
        "02F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9"
    );

    assert_eq!(g.add(&g).unwrap(), two_g);
    assert_eq!(g.add(&two_g).unwrap(), three_g);
}

#[test]
fn ed25519_generator_multiples_match_known_hex() {
    let curve = curve_ref(by_name("Ed25519").unwrap());
    let g = Point::from_affine(&curve, &curve.gx.clone(), &curve.gy.clone()).unwrap();

    assert_eq!(
        to_hex(&g.encode_compressed().unwrap()),
        "02216936D3CD6E53FEC0A4E231FDD6DC5C692CC7609525A7B2C9562D608F25D51A"
    );

    let two_g = g.double().unwrap();
    assert_eq!(
        to_hex(&two_g.encode_compressed().unwrap()),
        "0336AB384C9F5A046C3D043B7D1833E7AC080D8E4515D7A45F83C5A14E2843CE0E"
    );
}

#[test]
fn p256_zero_is_off_curve_and_undecodable() {
    let curve = curve_ref(by_name("P-256").unwrap());
    let zero = ecc_core::field::Fp::zero(&curve.fp);
    assert_eq!(Point::from_affine(&curve, &zero, &zero), Err(ecc_core::Error::PointNotOnCurve));

    let byte_len = curve.fp.byte_len();
    let mut bytes = vec![0x02u8];
    bytes.extend(std::iter::repeat(0u8).take(byte_len));
    assert!(Point::decode(&curve, &bytes).is_err());
}
