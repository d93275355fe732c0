//! ZPL output: the whole canvas as a single `^GF` graphic field.

use crate::canvas::Canvas;
use crate::export::pack_rows;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use std::fmt::Write;

/// How the graphic field payload is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZplEncoding {
    /// Two hex digits per byte, uncompressed
    Hex,
    /// Hex with run-length repeat counts and row shorthands
    CompressedAscii,
    /// zlib-deflated, base64 encoded, CRC-checked
    Z64,
}

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// A complete label: header, one graphic field at the origin, footer
pub fn graphic_field(canvas: &Canvas, encoding: ZplEncoding) -> String {
    let (bytes_per_row, rows) = pack_rows(canvas);
    let data = match encoding {
        ZplEncoding::Hex => hex_rows(&rows),
        ZplEncoding::CompressedAscii => compress_rows(&rows, bytes_per_row),
        ZplEncoding::Z64 => z64(&rows),
    };

    let mut zpl = String::with_capacity(data.len() + 64);
    writeln!(zpl, "^XA^PW{}^LL{}", canvas.width(), canvas.height()).unwrap();
    writeln!(
        zpl,
        "^FO0,0^GFA,{total},{total},{bytes_per_row},{data}^FS",
        total = rows.len()
    )
    .unwrap();
    zpl.push_str("^XZ\n");
    zpl
}

fn hex_rows(rows: &[u8]) -> String {
    let mut hex = String::with_capacity(rows.len() * 2);
    for byte in rows {
        hex.push(HEX[(byte >> 4) as usize] as char);
        hex.push(HEX[(byte & 0x0f) as usize] as char);
    }
    hex
}

/// ZPL compressed ASCII. Each row is written as hex with runs of a repeated digit
/// prefixed by a count; a row ending in zeros or in `F`s is cut short with `,`
/// or `!`, and a row identical to the one before it is written as `:`.
fn compress_rows(rows: &[u8], bytes_per_row: usize) -> String {
    let mut out = String::new();
    if bytes_per_row == 0 {
        return out;
    }

    let mut previous: Option<&[u8]> = None;
    for row in rows.chunks(bytes_per_row) {
        if previous == Some(row) {
            out.push(':');
            continue;
        }
        previous = Some(row);

        let hex = hex_rows(row);
        let (body, tail) = if let Some(stripped) = strip_run(&hex, '0') {
            (stripped, Some(','))
        } else if let Some(stripped) = strip_run(&hex, 'F') {
            (stripped, Some('!'))
        } else {
            (hex.as_str(), None)
        };

        push_runs(&mut out, body);
        if let Some(tail) = tail {
            out.push(tail);
        }
    }
    out
}

/// `hex` without its trailing run of `digit`, if it has one
fn strip_run(hex: &str, digit: char) -> Option<&str> {
    let stripped = hex.trim_end_matches(digit);
    (stripped.len() < hex.len()).then_some(stripped)
}

fn push_runs(out: &mut String, hex: &str) {
    let bytes = hex.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let digit = bytes[i];
        let run = bytes[i..].iter().take_while(|&&b| b == digit).count();
        push_run(out, run, digit as char);
        i += run;
    }
}

/// Repeat counts: `G`..`Y` are 1 to 19, `g`..`z` are 20 to 400 in steps of 20
fn push_run(out: &mut String, mut run: usize, digit: char) {
    const MAX: usize = 400 + 19;

    while run > 0 {
        let count = run.min(MAX);
        if count > 1 {
            let high = count / 20;
            let low = count % 20;
            if high > 0 {
                out.push((b'f' + high as u8) as char);
            }
            if low > 0 {
                out.push((b'F' + low as u8) as char);
            }
        }
        out.push(digit);
        run -= count;
    }
}

fn z64(rows: &[u8]) -> String {
    let deflated = compress_to_vec_zlib(rows, CompressionLevel::DefaultLevel as u8);
    let encoded = STANDARD.encode(deflated);
    let crc = crc16_xmodem(encoded.as_bytes());
    format!(":Z64:{encoded}:{crc:04X}")
}

/// CRC-16/XMODEM (polynomial 0x1021, initial value 0)
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ 0x1021
            } else {
                crc << 1
            };
        }
    }
    crc
}
