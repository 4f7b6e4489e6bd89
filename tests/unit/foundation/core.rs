use super::*;

#[test]
fn hex_parse_accepts_rgb_and_rgba() {
    assert_eq!(Rgba8::from_hex("#0009FF").unwrap(), Rgba8::rgb(0, 9, 255));
    assert_eq!(
        Rgba8::from_hex("ff001d80").unwrap(),
        Rgba8 {
            r: 255,
            g: 0,
            b: 29,
            a: 128
        }
    );
}

#[test]
fn hex_parse_rejects_garbage() {
    assert!(Rgba8::from_hex("#12345").is_err());
    assert!(Rgba8::from_hex("#zzzzzz").is_err());
    assert!(Rgba8::from_hex("#ééé").is_err());
}

#[test]
fn hex_output_omits_opaque_alpha() {
    assert_eq!(Rgba8::rgb(0, 254, 45).to_hex(), "#00fe2d");
    let c = Rgba8 {
        r: 1,
        g: 2,
        b: 3,
        a: 4,
    };
    assert_eq!(c.to_hex(), "#01020304");
}

#[test]
fn serde_uses_hex_strings() {
    let c: Rgba8 = serde_json::from_str("\"#fefe00\"").unwrap();
    assert_eq!(c, Rgba8::rgb(254, 254, 0));
    assert_eq!(serde_json::to_string(&c).unwrap(), "\"#fefe00\"");
    assert!(serde_json::from_str::<Rgba8>("\"red\"").is_err());
}

#[test]
fn lerp_hits_endpoints() {
    let a = Rgba8::rgb(0, 0, 0);
    let b = Rgba8::rgb(200, 100, 50);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8::rgb(100, 50, 25));
}
