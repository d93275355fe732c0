//! EPL2 output: the whole canvas as one `GW` graphic.

use crate::canvas::Canvas;
use crate::export::pack_rows;

/// Gap between labels, in dots
const LABEL_GAP: u32 = 24;

/// A complete label: clear the buffer, set the label size, send the graphic and
/// print one copy. EPL2 burns a dot for every zero bit, so the packed rows are
/// inverted.
pub fn graphic(canvas: &Canvas) -> Vec<u8> {
    let (bytes_per_row, mut rows) = pack_rows(canvas);
    for byte in rows.iter_mut() {
        *byte = !*byte;
    }

    let mut buf = Vec::with_capacity(rows.len() + 64);
    epl_line(&mut buf, "N");
    epl_line(&mut buf, &format!("q{}", canvas.width()));
    epl_line(&mut buf, &format!("Q{},{}", canvas.height(), LABEL_GAP));
    epl_line(&mut buf, &format!("GW0,0,{},{}", bytes_per_row, canvas.height()));
    buf.extend_from_slice(&rows);
    buf.extend_from_slice(b"\r\n");
    epl_line(&mut buf, "P1");
    buf
}

fn epl_line(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(s.as_bytes());
    buf.extend_from_slice(b"\r\n");
}
