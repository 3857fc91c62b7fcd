use super::*;

macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        assert!(
            ($a - $b).abs() < 1e-4,
            "assertion failed: `(left == right)` (left: `{:?}`, right: `{:?}`)",
            $a,
            $b
        );
    };
}

#[test]
fn test_hsba_channels() {
    let mut hsba = Hsba::new(0.25, 0.5, 0.75, 1.0);

    assert_approx_eq!(hsba.get_value(Hsba::HUE), 0.25);
    assert_approx_eq!(hsba.get_value(Hsba::SATURATION), 0.5);
    assert_approx_eq!(hsba.get_value(Hsba::BRIGHTNESS), 0.75);
    assert_approx_eq!(hsba.get_value(Hsba::ALPHA), 1.0);

    // Mutators clamp into the unit range.
    hsba.set_value(Hsba::HUE, 1.5);
    assert_approx_eq!(hsba.h, 1.0);
    hsba.set_value(Hsba::SATURATION, -0.5);
    assert_approx_eq!(hsba.s, 0.0);
    hsba.set_value(Hsba::BRIGHTNESS, 2.0);
    assert_approx_eq!(hsba.b, 1.0);
    hsba.set_value(Hsba::ALPHA, -1.0);
    assert_approx_eq!(hsba.a, 0.0);

    // Unknown channels are ignored.
    let before = hsba;
    hsba.set_value("lightness", 0.3);
    assert_eq!(hsba, before);
    assert_approx_eq!(hsba.get_value("lightness"), 0.0);
}

#[test]
fn test_hsba_round_trip_through_hsla() {
    // Stay off the achromatic corners where hue canonicalizes to zero.
    let samples = [
        Hsba::new(0.0, 1.0, 1.0, 1.0),
        Hsba::new(0.125, 0.8, 0.9, 1.0),
        Hsba::new(1.0 / 3.0, 0.4, 0.6, 0.5),
        Hsba::new(0.5, 0.9, 0.3, 0.25),
        Hsba::new(0.75, 0.2, 0.8, 1.0),
        Hsba::new(0.9, 0.65, 0.45, 0.75),
    ];

    for original in samples {
        let rounded = Hsba::from_hsla(original.to_hsla());
        assert_approx_eq!(original.h, rounded.h);
        assert_approx_eq!(original.s, rounded.s);
        assert_approx_eq!(original.b, rounded.b);
        assert_approx_eq!(original.a, rounded.a);
    }
}

#[test]
fn test_achromatic_hue_is_canonical_zero() {
    // With saturation or brightness at zero the hue is unrecoverable; the
    // conversion pins it to zero rather than inventing one.
    let gray = Hsba::from_rgba(Rgba {
        r: 0.5,
        g: 0.5,
        b: 0.5,
        a: 1.0,
    });
    assert_approx_eq!(gray.h, 0.0);
    assert_approx_eq!(gray.s, 0.0);
    assert_approx_eq!(gray.b, 0.5);

    let black = Hsba::from_rgba(Rgba {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    });
    assert_approx_eq!(black.h, 0.0);
    assert_approx_eq!(black.s, 0.0);
    assert_approx_eq!(black.b, 0.0);
}

#[test]
fn test_channel_moves_do_not_disturb_hue() {
    let mut hsba = Hsba::new(0.7, 0.5, 0.5, 1.0);
    hsba.set_value(Hsba::SATURATION, 0.1);
    hsba.set_value(Hsba::BRIGHTNESS, 0.9);
    hsba.set_value(Hsba::ALPHA, 0.3);
    assert_approx_eq!(hsba.h, 0.7);
}

#[test]
fn test_pure_hue_derivation() {
    let hsba = Hsba::new(0.4, 0.2, 0.1, 0.5);
    let pure = hsba.pure_hue();
    assert_approx_eq!(pure.h, 0.4);
    assert_approx_eq!(pure.s, 1.0);
    assert_approx_eq!(pure.b, 1.0);
    assert_approx_eq!(pure.a, 1.0);
}

#[test]
fn test_primary_colors_to_rgba() {
    let red = Hsba::new(0.0, 1.0, 1.0, 1.0).to_rgba();
    assert_approx_eq!(red.r, 1.0);
    assert_approx_eq!(red.g, 0.0);
    assert_approx_eq!(red.b, 0.0);

    let green = Hsba::new(1.0 / 3.0, 1.0, 1.0, 1.0).to_rgba();
    assert_approx_eq!(green.r, 0.0);
    assert_approx_eq!(green.g, 1.0);
    assert_approx_eq!(green.b, 0.0);

    let blue = Hsba::new(2.0 / 3.0, 1.0, 1.0, 1.0).to_rgba();
    assert_approx_eq!(blue.r, 0.0);
    assert_approx_eq!(blue.g, 0.0);
    assert_approx_eq!(blue.b, 1.0);

    // Hue 1.0 wraps back around to red.
    let wrapped = Hsba::new(1.0, 1.0, 1.0, 1.0).to_rgba();
    assert_approx_eq!(wrapped.r, 1.0);
    assert_approx_eq!(wrapped.g, 0.0);
    assert_approx_eq!(wrapped.b, 0.0);
}

#[test]
fn test_format_hexa() {
    let red = Hsba::new(0.0, 1.0, 1.0, 1.0);
    assert_eq!(format_hexa(red.to_hsla()).as_ref(), "#FF0000FF");

    let black = Hsba::new(0.0, 0.0, 0.0, 1.0);
    assert_eq!(format_hexa(black.to_hsla()).as_ref(), "#000000FF");

    let translucent_white = Hsba::new(0.0, 0.0, 1.0, 0.5);
    assert_eq!(format_hexa(translucent_white.to_hsla()).as_ref(), "#FFFFFF80");
}

#[test]
fn test_parse_hex() {
    let opaque = parse_hex("#FF8000").unwrap();
    let rgba = opaque.to_rgb();
    assert_approx_eq!(rgba.r, 1.0);
    assert_approx_eq!(rgba.g, 128.0 / 255.0);
    assert_approx_eq!(rgba.b, 0.0);
    assert_approx_eq!(rgba.a, 1.0);

    let translucent = parse_hex("  #00FF0080  ").unwrap();
    let rgba = translucent.to_rgb();
    assert_approx_eq!(rgba.g, 1.0);
    assert_approx_eq!(rgba.a, 128.0 / 255.0);

    assert!(parse_hex("").is_err());
    assert!(parse_hex("FF0000").is_err());
    assert!(parse_hex("#F00").is_err());
    assert!(parse_hex("#GG0000").is_err());
}

#[test]
fn test_parse_format_round_trip() {
    for hex in ["#FF0000FF", "#00FF00FF", "#1A2B3C4D", "#000000FF"] {
        let color = parse_hex(hex).unwrap();
        assert_eq!(format_hexa(color).as_ref(), hex);
    }
}
