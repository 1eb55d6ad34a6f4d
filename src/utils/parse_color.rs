use crate::{ColorModel, Error, Point, Result, Rgb};

/// Parses `#RRGGBB`, hexadecimal digits in either case.
pub fn parse_hex_color(s: &str) -> Result<Rgb> {
    let invalid = || Error::InvalidColor(s.to_string());
    let digits = s.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Parses `X,Y`.
fn parse_center(s: &str) -> Result<Point> {
    let syntax = || Error::ModelSyntax(format!("invalid center {:?}", s));
    let (x, y) = s.split_once(',').ok_or_else(syntax)?;
    let x = x.trim().parse().map_err(|_| syntax())?;
    let y = y.trim().parse().map_err(|_| syntax())?;
    Ok(Point::new(x, y))
}

impl std::str::FromStr for ColorModel {
    type Err = Error;

    /// Parses `NAME COLOR[:COLOR...][;X,Y]`, e.g. `radial #000000:#FF0000:#0000FF;10,20`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, rest) = s
            .split_once(char::is_whitespace)
            .ok_or_else(|| Error::ModelSyntax(s.to_string()))?;
        if !ColorModel::NAMES.contains(&name) {
            return Err(Error::ModelSyntax(format!(
                "unknown model {:?}, expected one of {}",
                name,
                ColorModel::NAMES.join(", ")
            )));
        }
        let (colors, center) = match rest.trim().split_once(';') {
            Some((colors, center)) => (colors, Some(parse_center(center)?)),
            None => (rest.trim(), None),
        };
        let colors = colors
            .split(':')
            .map(|c| parse_hex_color(c.trim()))
            .collect::<Result<Vec<_>>>()?;
        ColorModel::from_parts(name, &colors, center)
    }
}
