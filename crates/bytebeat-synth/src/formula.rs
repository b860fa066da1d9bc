//! The five selectable waveform formulas.
//!
//! Four variants are classic bytebeat expressions: each output byte is a
//! closed-form integer/bitwise function of the sample index `t`, evaluated
//! with two's-complement 32-bit semantics. Overflow wraps, `>>` is an
//! arithmetic shift, and `/` and `%` truncate toward zero. The wraparound
//! is part of the intended sound, so every multiply and add that can
//! overflow uses explicit wrapping arithmetic instead of relying on
//! release-mode behavior.
//!
//! The fifth variant is a plain 220 Hz sine tone computed on the f64 path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::format::AudioFormat;

const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Fixed frequency of the sine-tone variant, in Hz.
pub const SINE_TONE_FREQ_HZ: f64 = 220.0;

/// A selectable waveform formula.
///
/// Each variant is a pure function `t -> byte` with its own default
/// [`AudioFormat`]; callers may override the defaults freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// Pure 220 Hz sine tone.
    #[serde(rename = "sine")]
    SineTone,
    /// Gated shift/XOR texture with a 13-step modulo melody.
    Glitch,
    /// Heavy square-ish riff driven by `t & (t >> 12)`.
    Bold,
    /// Sparse 0/64 pulse train.
    Tunnel,
    /// Rising metallic arpeggio.
    Icons,
}

impl Formula {
    /// All formulas, in presentation order.
    pub const ALL: [Formula; 5] = [
        Formula::SineTone,
        Formula::Glitch,
        Formula::Bold,
        Formula::Tunnel,
        Formula::Icons,
    ];

    /// Stable identifier used on the command line and in serialized specs.
    pub fn name(&self) -> &'static str {
        match self {
            Formula::SineTone => "sine",
            Formula::Glitch => "glitch",
            Formula::Bold => "bold",
            Formula::Tunnel => "tunnel",
            Formula::Icons => "icons",
        }
    }

    /// The expression each variant evaluates, as documentation.
    pub fn expression(&self) -> &'static str {
        match self {
            Formula::SineTone => "round(clamp((sin(2*pi*220*t/rate) + 1) * 127.5, 0, 255))",
            Formula::Glitch => {
                "i=t&8191, (((t*((t>>9^((t>>9)-1)^1)%13)&255)/2) \
                 + ((i<4096 ? t>>3&t<<(t>>12&2) : t>>4&t*(t^t+t/256))&255)/2) * (2+(t>>16))"
            }
            Formula::Bold => "d=(t*(t&t>>12)*8/11025)|0, ((d&16)/8-1)*(d*(d^15)+d+127)",
            Formula::Tunnel => "(t&t+t/256)-t*(t>>15)&64",
            Formula::Icons => "t*(t*287/256&t>>11&31)",
        }
    }

    /// Default format for this variant (overridable by the caller).
    pub fn default_format(&self) -> AudioFormat {
        match self {
            Formula::SineTone => AudioFormat::mono8(8000, 200),
            Formula::Glitch => AudioFormat::mono8(10000, 23),
            Formula::Bold => AudioFormat::mono8(8000, 17),
            Formula::Tunnel => AudioFormat::mono8(8000, 14),
            Formula::Icons => AudioFormat::mono8(16000, 4),
        }
    }

    /// Evaluates the formula at sample index `t`.
    ///
    /// `sample_rate` only affects the sine-tone variant; the bytebeat
    /// variants are functions of `t` alone.
    pub fn sample(&self, t: i32, sample_rate: i32) -> u8 {
        match self {
            Formula::SineTone => sine_tone(t, sample_rate),
            Formula::Glitch => (glitch(t) & 0xFF) as u8,
            Formula::Bold => (bold(t) & 0xFF) as u8,
            Formula::Tunnel => (tunnel(t) & 0xFF) as u8,
            Formula::Icons => (icons(t) & 0xFF) as u8,
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formula {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(Formula::SineTone),
            "glitch" => Ok(Formula::Glitch),
            "bold" => Ok(Formula::Bold),
            "tunnel" => Ok(Formula::Tunnel),
            "icons" => Ok(Formula::Icons),
            other => Err(format!(
                "unknown formula: {} (expected sine, glitch, bold, tunnel, or icons)",
                other
            )),
        }
    }
}

/// 220 Hz sine scaled to unsigned 8-bit, rounding half away from zero.
fn sine_tone(t: i32, sample_rate: i32) -> u8 {
    let phase = TWO_PI * SINE_TONE_FREQ_HZ * t as f64 / sample_rate as f64;
    ((phase.sin() + 1.0) * 127.5).clamp(0.0, 255.0).round() as u8
}

/// `i=t&8191, (((t*(gate%13)&255)/2) + ((cond)&255)/2) * (2+(t>>16))`
/// where `gate = t>>9 ^ ((t>>9)-1) ^ 1` and `cond` switches on `i < 4096`.
fn glitch(t: i32) -> i32 {
    let i = t & 8191;
    let gate = (t >> 9) ^ (t >> 9).wrapping_sub(1) ^ 1;
    let part1 = (t.wrapping_mul(gate % 13) & 255) / 2;

    let cond = if i < 4096 {
        (t >> 3) & t << ((t >> 12) & 2)
    } else {
        (t >> 4) & t.wrapping_mul(t ^ t.wrapping_add(t / 256))
    };
    let part2 = (cond & 255) / 2;

    (part1 + part2).wrapping_mul(2 + (t >> 16))
}

/// `d=(t*(t&t>>12)*8/11025)|0, ((d&16)/8-1)*(d*(d^15)+d+127)`.
///
/// `d` is the wrapped 32-bit product divided by 11025.0 on the float path
/// and truncated toward zero; using integer division instead changes the
/// audible output.
fn bold(t: i32) -> i32 {
    let d = (t.wrapping_mul(t & (t >> 12)).wrapping_mul(8) as f64 / 11025.0) as i32;
    ((d & 16) / 8 - 1).wrapping_mul(d.wrapping_mul(d ^ 15).wrapping_add(d).wrapping_add(127))
}

/// `(t&t+t/256)-t*(t>>15)&64`.
///
/// Operator precedence is load-bearing: `&64` applies to the whole
/// difference, and the first `&` applies to `t + t/256`. Do not re-bracket.
fn tunnel(t: i32) -> i32 {
    (t & t.wrapping_add(t / 256)).wrapping_sub(t.wrapping_mul(t >> 15)) & 64
}

/// `t*(t*287/256&t>>11&31)`.
fn icons(t: i32) -> i32 {
    t.wrapping_mul(t.wrapping_mul(287) / 256 & (t >> 11) & 31)
}
