//! CSS color strings to normalized RGBA.

use core::fmt;

use crate::error::ColorParseError;

/// A color with every component in `[0, 1]`, alpha not premultiplied.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Opaque color from a packed `0xrrggbb` value.
    pub fn from_rgb_u32(rgb: u32) -> Self {
        let channel = |shift: u32| ((rgb >> shift) & 0xff) as f32 / 255.0;
        Rgba::new(channel(16), channel(8), channel(0), 1.0)
    }

    /// Parse a CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`,
    /// `rgb()`/`rgba()` in either comma or space syntax, a named color or
    /// `transparent`. Matching is case-insensitive.
    pub fn parse(input: &str) -> Result<Rgba, ColorParseError> {
        let s = input.trim().to_ascii_lowercase();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex)
                .ok_or_else(|| ColorParseError::InvalidHex(input.trim().to_owned()));
        }
        if let Some(args) = s.strip_prefix("rgba(").or_else(|| s.strip_prefix("rgb(")) {
            return args
                .strip_suffix(')')
                .and_then(parse_function_args)
                .ok_or_else(|| ColorParseError::InvalidFunction(input.trim().to_owned()));
        }
        if s == "transparent" {
            return Ok(Rgba::TRANSPARENT);
        }
        NAMED_COLORS
            .binary_search_by(|(name, _)| name.cmp(&s.as_str()))
            .map(|i| Rgba::from_rgb_u32(NAMED_COLORS[i].1))
            .map_err(|_| ColorParseError::UnknownName(input.trim().to_owned()))
    }

    /// Components as the `[r, g, b, a]` array shader uniforms take.
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `rgb(...)` without alpha, for SVG attributes that carry opacity separately.
    pub fn rgb_string(&self) -> String {
        format!("rgb({}, {}, {})", to_byte(self.r), to_byte(self.g), to_byte(self.b))
    }
}

impl core::str::FromStr for Rgba {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rgba::parse(s)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b),
            self.a
        )
    }
}

fn to_byte(component: f32) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok();
    let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let bytes: [u8; 4] = match hex.len() {
        3 | 4 => {
            let mut out = [0xff; 4];
            for (i, byte) in out.iter_mut().enumerate().take(hex.len()) {
                *byte = digit(i)? * 17;
            }
            out
        }
        6 | 8 => {
            let mut out = [0xff; 4];
            for (i, byte) in out.iter_mut().enumerate().take(hex.len() / 2) {
                *byte = pair(2 * i)?;
            }
            out
        }
        _ => return None,
    };
    let [r, g, b, a] = bytes.map(|v| v as f32 / 255.0);
    Some(Rgba::new(r, g, b, a))
}

/// `255, 0, 0`, `255 0 0 / 50%` or `100%, 0%, 0%, 0.5`.
fn parse_function_args(args: &str) -> Option<Rgba> {
    let (channels, slash_alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (args, None),
    };
    let parts: Vec<&str> = channels
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let (rgb, alpha) = match (parts.as_slice(), slash_alpha) {
        ([r, g, b], alpha) => ([*r, *g, *b], alpha),
        ([r, g, b, a], None) => ([*r, *g, *b], Some(*a)),
        _ => return None,
    };
    let [r, g, b] = [channel(rgb[0])?, channel(rgb[1])?, channel(rgb[2])?];
    let a = match alpha {
        Some(alpha) => alpha_value(alpha)?,
        None => 1.0,
    };
    Some(Rgba::new(r, g, b, a))
}

fn channel(part: &str) -> Option<f32> {
    let value = match part.strip_suffix('%') {
        Some(percent) => percent.parse::<f32>().ok()? / 100.0,
        None => part.parse::<f32>().ok()? / 255.0,
    };
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}

fn alpha_value(part: &str) -> Option<f32> {
    let value = match part.strip_suffix('%') {
        Some(percent) => percent.parse::<f32>().ok()? / 100.0,
        None => part.parse::<f32>().ok()?,
    };
    value.is_finite().then(|| value.clamp(0.0, 1.0))
}

/// CSS named colors, sorted by name.
const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xa9a9a9),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkslategrey", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("grey", 0x808080),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightgrey", 0xd3d3d3),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_color(input: &str, expected: [f32; 4]) {
        let color = Rgba::parse(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        for (got, want) in color.to_array().iter().zip(expected) {
            assert!((got - want).abs() < 1e-3, "{input}: {color:?}");
        }
    }

    #[test]
    fn named_table_is_sorted() {
        assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn hex_forms() {
        assert_color("#f00", [1.0, 0.0, 0.0, 1.0]);
        assert_color("#F008", [1.0, 0.0, 0.0, 136.0 / 255.0]);
        assert_color("#336699", [0.2, 0.4, 0.6, 1.0]);
        assert_color("  #33669980 ", [0.2, 0.4, 0.6, 128.0 / 255.0]);
    }

    #[test]
    fn functions() {
        assert_color("rgb(255, 128, 0)", [1.0, 128.0 / 255.0, 0.0, 1.0]);
        assert_color("rgba(0,0,255,0.25)", [0.0, 0.0, 1.0, 0.25]);
        assert_color("rgb(0 255 0 / 50%)", [0.0, 1.0, 0.0, 0.5]);
        assert_color("RGB(100%, 50%, 0%)", [1.0, 0.5, 0.0, 1.0]);
        // out of range channels clamp
        assert_color("rgb(300, -5, 0)", [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn names() {
        assert_color("rebeccapurple", [0.4, 0.2, 0.6, 1.0]);
        assert_color("White", [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(Rgba::parse("transparent"), Ok(Rgba::TRANSPARENT));
        assert_eq!("black".parse::<Rgba>(), Ok(Rgba::BLACK));
    }

    #[test]
    fn errors() {
        assert_eq!(Rgba::parse("   "), Err(ColorParseError::Empty));
        assert!(matches!(Rgba::parse("#12345"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(Rgba::parse("#ggg"), Err(ColorParseError::InvalidHex(_))));
        assert!(matches!(
            Rgba::parse("rgb(1, 2)"),
            Err(ColorParseError::InvalidFunction(_))
        ));
        assert!(matches!(
            Rgba::parse("rgb(1, 2, 3"),
            Err(ColorParseError::InvalidFunction(_))
        ));
        assert_eq!(
            Rgba::parse("blurple"),
            Err(ColorParseError::UnknownName("blurple".to_owned()))
        );
    }

    #[test]
    fn display() {
        let color = Rgba::new(1.0, 0.5, 0.0, 0.25);
        assert_eq!(color.to_string(), "rgba(255, 128, 0, 0.25)");
        assert_eq!(color.rgb_string(), "rgb(255, 128, 0)");
    }
}
