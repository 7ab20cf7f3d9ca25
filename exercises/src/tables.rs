//! Fixed-iteration tables: temperature conversions (chapter 1) and integer
//! type ranges and sizes (chapter 2).

use clap::ValueEnum;
use std::fmt::{self, Write};
use std::mem::size_of;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TemperatureTable {
    /// Fahrenheit to Celsius with integer arithmetic.
    FahrInt,
    /// Fahrenheit to Celsius in floating point, with a header.
    #[default]
    FahrFloat,
    /// Fahrenheit to Celsius, space-separated, no header.
    FahrCompact,
    /// Celsius to Fahrenheit, ascending.
    Celsius,
    /// Celsius to Fahrenheit, descending.
    CelsiusReversed,
}

/// Inclusive range walked by a conversion table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub lower: f64,
    pub upper: f64,
    pub step: f64,
}

pub const FAHRENHEIT_SPAN: Span = Span {
    lower: 0.0,
    upper: 300.0,
    step: 20.0,
};

pub const CELSIUS_SPAN: Span = Span {
    lower: -45.0,
    upper: 100.0,
    step: 10.0,
};

impl Span {
    pub fn ascending(self) -> impl Iterator<Item = f64> {
        let Span { lower, upper, step } = self;
        std::iter::successors(Some(lower), move |t| Some(t + step)).take_while(move |&t| t <= upper)
    }

    pub fn descending(self) -> impl Iterator<Item = f64> {
        let Span { lower, upper, step } = self;
        std::iter::successors(Some(upper), move |t| Some(t - step)).take_while(move |&t| t >= lower)
    }
}

pub fn fahrenheit_to_celsius(fahr: f64) -> f64 {
    (5.0 / 9.0) * (fahr - 32.0)
}

/// Integer conversion; the division truncates toward zero.
pub fn fahrenheit_to_celsius_int(fahr: i32) -> i32 {
    5 * (fahr - 32) / 9
}

pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    (9.0 / 5.0) * celsius + 32.0
}

impl TemperatureTable {
    pub fn title(self) -> Option<&'static str> {
        match self {
            TemperatureTable::FahrInt | TemperatureTable::FahrCompact => None,
            TemperatureTable::FahrFloat => Some("Fahrenheit to Celsius Conversion Table"),
            TemperatureTable::Celsius => Some("Celsius to Fahrenheit Conversion Table"),
            TemperatureTable::CelsiusReversed => {
                Some("Celsius to Fahrenheit Conversion Table (Reversed)")
            }
        }
    }

    pub fn render<W: Write + ?Sized>(self, out: &mut W) -> fmt::Result {
        if let Some(title) = self.title() {
            writeln!(out, "{title}")?;
        }
        match self {
            TemperatureTable::FahrInt => {
                let Span { lower, upper, step } = FAHRENHEIT_SPAN;
                for fahr in (lower as i32..=upper as i32).step_by(step as usize) {
                    writeln!(out, "{:3}\t{:6}", fahr, fahrenheit_to_celsius_int(fahr))?;
                }
            }
            TemperatureTable::FahrFloat => {
                for fahr in FAHRENHEIT_SPAN.ascending() {
                    writeln!(out, "{:3.0}\t{:6.1}", fahr, fahrenheit_to_celsius(fahr))?;
                }
            }
            TemperatureTable::FahrCompact => {
                for fahr in FAHRENHEIT_SPAN.ascending() {
                    writeln!(out, "{:3} {:6.1}", fahr as i32, fahrenheit_to_celsius(fahr))?;
                }
            }
            TemperatureTable::Celsius => {
                for celsius in CELSIUS_SPAN.ascending() {
                    writeln!(out, "{:3.0}\t{:6.1}", celsius, celsius_to_fahrenheit(celsius))?;
                }
            }
            TemperatureTable::CelsiusReversed => {
                for celsius in CELSIUS_SPAN.descending() {
                    writeln!(out, "{:3.0}\t{:6.1}", celsius, celsius_to_fahrenheit(celsius))?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeRange {
    pub name: &'static str,
    pub min: i128,
    pub max: i128,
}

macro_rules! type_range {
    ($ty:ty, $name:literal) => {
        TypeRange {
            name: $name,
            min: <$ty>::MIN as i128,
            max: <$ty>::MAX as i128,
        }
    };
}

pub fn type_ranges() -> [TypeRange; 8] {
    [
        type_range!(i8, "char (signed)"),
        type_range!(u8, "char (unsigned)"),
        type_range!(i16, "short (signed)"),
        type_range!(u16, "short (unsigned)"),
        type_range!(i32, "int (signed)"),
        type_range!(u32, "int (unsigned)"),
        type_range!(i64, "long (signed)"),
        type_range!(u64, "long (unsigned)"),
    ]
}

pub fn render_type_ranges<W: Write + ?Sized>(out: &mut W) -> fmt::Result {
    writeln!(out, "{:<20} {:>15} {:>15}", "Type", "Min Value", "Max Value")?;
    for range in type_ranges() {
        writeln!(out, "{:<20} {:>15} {:>15}", range.name, range.min, range.max)?;
    }
    Ok(())
}

pub fn type_sizes() -> [(&'static str, usize); 5] {
    [
        ("bool", size_of::<bool>()),
        ("u8", size_of::<u8>()),
        ("i32", size_of::<i32>()),
        ("f32", size_of::<f32>()),
        ("f64", size_of::<f64>()),
    ]
}

pub fn render_type_sizes<W: Write + ?Sized>(out: &mut W) -> fmt::Result {
    writeln!(out, "Size chart of fundamental types:")?;
    for (name, size) in type_sizes() {
        let unit = if size == 1 { "byte" } else { "bytes" };
        writeln!(out, "{name}: {size} {unit}")?;
    }
    Ok(())
}
