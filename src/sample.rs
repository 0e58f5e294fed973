use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use crate::error::SampleError;

/// State of a single pixel. Spaces in a corpus are unshaded, any other character is shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Shade {
    Unshaded = 0,
    Shaded = 1,
}

impl Shade {
    pub fn from_char(c: char) -> Self {
        if c == ' ' {
            Shade::Unshaded
        } else {
            Shade::Shaded
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<usize> for Shade {
    type Error = SampleError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Shade::Unshaded),
            1 => Ok(Shade::Shaded),
            other => Err(SampleError::InvalidShade(other)),
        }
    }
}

/// One labeled square grid of pixels, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    digit: u8,
    side_length: usize,
    pixels: Vec<Shade>,
}

impl Sample {
    /// An all-unshaded grid labeled 0, for building samples by hand.
    pub fn blank(side_length: usize) -> Self {
        Sample {
            digit: 0,
            side_length,
            pixels: vec![Shade::Unshaded; side_length * side_length],
        }
    }

    /// Reads the first record of a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SampleError> {
        let mut reader = BufReader::new(File::open(path)?);
        Self::read_from(&mut reader)?.ok_or_else(|| {
            SampleError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no sample record in file",
            ))
        })
    }

    /// Reads the next record from a corpus.
    ///
    /// Returns `Ok(None)` once the input is exhausted. A record that is cut short or
    /// whose rows disagree in length is an error, never end-of-stream.
    pub fn read_from<R: BufRead>(reader: &mut R) -> Result<Option<Self>, SampleError> {
        let mut line = String::new();
        if !next_line(reader, &mut line)? {
            return Ok(None);
        }

        if line.is_empty() {
            // Trailing blank lines end the corpus; anything after them does not.
            while next_line(reader, &mut line)? {
                if !line.is_empty() {
                    return Err(SampleError::MalformedLabel {
                        line: String::new(),
                    });
                }
            }
            return Ok(None);
        }

        let digit = parse_label(&line)?;

        if !next_line(reader, &mut line)? {
            return Err(SampleError::Truncated {
                expected: 1,
                found: 0,
            });
        }
        let side_length = line.chars().count();
        if side_length == 0 {
            return Err(SampleError::EmptyRow);
        }

        let mut pixels = Vec::with_capacity(side_length * side_length);
        pixels.extend(line.chars().map(Shade::from_char));

        for row in 1..side_length {
            if !next_line(reader, &mut line)? {
                return Err(SampleError::Truncated {
                    expected: side_length,
                    found: row,
                });
            }
            let width = line.chars().count();
            if width != side_length {
                return Err(SampleError::RaggedRow {
                    row,
                    expected: side_length,
                    found: width,
                });
            }
            pixels.extend(line.chars().map(Shade::from_char));
        }

        Ok(Some(Sample {
            digit,
            side_length,
            pixels,
        }))
    }

    pub fn digit(&self) -> u8 {
        self.digit
    }

    pub fn side_length(&self) -> usize {
        self.side_length
    }

    pub fn pixels(&self) -> &[Shade] {
        &self.pixels
    }

    pub fn pixel(&self, row: usize, col: usize) -> Option<Shade> {
        if row >= self.side_length || col >= self.side_length {
            return None;
        }
        Some(self.pixels[row * self.side_length + col])
    }

    pub fn set_pixel(&mut self, row: usize, col: usize, shade: Shade) -> Result<(), SampleError> {
        if row >= self.side_length || col >= self.side_length {
            return Err(SampleError::OutOfRange { row, col });
        }
        self.pixels[row * self.side_length + col] = shade;
        Ok(())
    }

    /// Resets every pixel to unshaded.
    pub fn clear(&mut self) {
        self.pixels.fill(Shade::Unshaded);
    }
}

/// Lazily reads records from a corpus until end-of-stream or the first malformed record.
pub struct Samples<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> Iterator for Samples<R> {
    type Item = Result<Sample, SampleError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match Sample::read_from(&mut self.reader) {
            Ok(Some(sample)) => Some(Ok(sample)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

pub fn samples<R: BufRead>(reader: R) -> Samples<R> {
    Samples {
        reader,
        done: false,
    }
}

fn parse_label(line: &str) -> Result<u8, SampleError> {
    let mut chars = line.chars();
    let digit = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_digit(10),
        _ => None,
    };
    digit
        .map(|d| d as u8)
        .ok_or_else(|| SampleError::MalformedLabel {
            line: line.to_string(),
        })
}

// Reads one line without its terminator. Returns false at end of input.
fn next_line<R: BufRead>(reader: &mut R, buf: &mut String) -> io::Result<bool> {
    buf.clear();
    if reader.read_line(buf)? == 0 {
        return Ok(false);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(true)
}
