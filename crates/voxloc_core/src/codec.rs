//! Location keys
//!
//! A key is `world:x,y,z` with two decimals per number, followed by
//! `:yaw:pitch` when the orientation is not zero. On the wire every `:`
//! becomes `/` and every `.` becomes `_`, so a key holds neither:
//!
//! ```text
//! world/100_00,64_00,-3_50/90_00/0_00
//! ```
//!
//! Numbers are rounded half-up from their shortest decimal form, so `0.125`
//! is written `0_13` and `1.005` is written `1_01`. Yaw and pitch are widened
//! to `f64` first. World names containing `/`, `_` or `.` do not survive the
//! substitution.

use std::sync::OnceLock;

use regex::Regex;
use voxloc_math::{Orientation, Vec3};

use crate::host::WorldLookup;
use crate::{Location, LocationError};

static KEY_PATTERN: OnceLock<Regex> = OnceLock::new();

fn key_pattern() -> &'static Regex {
    KEY_PATTERN.get_or_init(|| {
        Regex::new(
            r"^(?P<world>[^/]+):(?P<x>[\-0-9.]+),(?P<y>[\-0-9.]+),(?P<z>[\-0-9.]+)(:(?P<yaw>[\-0-9.]+):(?P<pitch>[\-0-9.]+))?$",
        )
        .expect("location key pattern is valid")
    })
}

/// Encode a location as a key
///
/// Fails with [`LocationError::MissingWorld`] if the location has no world,
/// or [`LocationError::NonFinite`] if a coordinate or angle is NaN or infinite.
pub fn encode(location: &Location) -> Result<String, LocationError> {
    let world = location.valid_world()?;
    let p = location.position;
    let yaw = f64::from(location.orientation.yaw);
    let pitch = f64::from(location.orientation.pitch);
    if !p.is_finite() || !yaw.is_finite() || !pitch.is_finite() {
        return Err(LocationError::NonFinite);
    }

    let mut key = format!(
        "{}:{},{},{}",
        world.name(),
        two_decimals(p.x),
        two_decimals(p.y),
        two_decimals(p.z)
    );
    if !location.orientation.is_zero() {
        key.push_str(&format!(":{}:{}", two_decimals(yaw), two_decimals(pitch)));
    }
    Ok(key.replace(':', "/").replace('.', "_"))
}

/// Round to two decimals, half away from zero, on the shortest decimal form
///
/// `Display` for `f64` prints the shortest digits that round-trip and never
/// uses an exponent.
fn two_decimals(value: f64) -> String {
    let text = value.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));

    // Digits of |value| * 100, truncated
    let mut scaled: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut i = scaled.len();
        loop {
            if i == 0 {
                scaled.insert(0, b'1');
                break;
            }
            i -= 1;
            if scaled[i] == b'9' {
                scaled[i] = b'0';
            } else {
                scaled[i] += 1;
                break;
            }
        }
    }

    let split = scaled.len() - 2;
    let whole = String::from_utf8_lossy(&scaled[..split]);
    let fraction = String::from_utf8_lossy(&scaled[split..]);
    format!("{}{}.{}", sign, whole, fraction)
}

/// Decode a key back into a location
///
/// Returns `None` when the key does not have the expected shape or a number
/// does not parse. A well-formed key whose world `worlds` cannot resolve
/// decodes to a location with no world.
pub fn decode(key: &str, worlds: &impl WorldLookup) -> Option<Location> {
    let text = key.replace('_', ".").replace('/', ":");
    let caps = key_pattern().captures(&text)?;

    let name = &caps["world"];
    let position = Vec3::new(
        caps["x"].parse().ok()?,
        caps["y"].parse().ok()?,
        caps["z"].parse().ok()?,
    );
    let orientation = match (caps.name("yaw"), caps.name("pitch")) {
        (Some(yaw), Some(pitch)) => Orientation::new(
            yaw.as_str().parse().ok()?,
            pitch.as_str().parse().ok()?,
        ),
        _ => Orientation::ZERO,
    };

    let world = worlds.lookup_world(name);
    if world.is_none() {
        log::debug!("Location key names unknown world '{}'", name);
    }
    Some(Location {
        world,
        position,
        orientation,
    })
}
