use super::{SymbolBitmap, SymbolError};

/// Bar/space widths of every Code 128 symbol value, starting with a bar
const PATTERNS: [&str; 106] = [
    "212222", "222122", "222221", "121223", "121322", "131222", "122213", "122312", "132212",
    "221213", "221312", "231212", "112232", "122132", "122231", "113222", "123122", "123221",
    "223211", "221132", "221231", "213212", "223112", "312131", "311222", "321122", "321221",
    "312212", "322112", "322211", "212123", "212321", "232121", "111323", "131123", "131321",
    "112313", "132113", "132311", "211313", "231113", "231311", "112133", "112331", "132131",
    "113123", "113321", "133121", "313121", "211331", "231131", "213113", "213311", "213131",
    "311123", "311321", "331121", "312113", "312311", "332111", "314111", "221411", "431111",
    "111224", "111422", "121124", "121421", "141122", "141221", "112214", "112412", "122114",
    "122411", "142112", "142211", "241211", "221114", "413111", "241112", "134111", "111242",
    "121142", "121241", "114212", "124112", "124211", "411212", "421112", "421211", "212141",
    "214121", "412121", "111143", "111341", "131141", "114113", "114311", "411113", "411311",
    "113141", "114131", "311141", "411131", "211412", "211214", "211232",
];

const STOP: &str = "2331112";

/// Shortest digit run worth switching to code set C for
const MIN_DIGIT_RUN: usize = 4;

/// The three Code 128 code sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeSet {
    /// Uppercase, digits, punctuation and control characters
    A,
    /// Printable ASCII
    B,
    /// Digit pairs
    C,
}

impl CodeSet {
    fn start(self) -> u8 {
        match self {
            CodeSet::A => 103,
            CodeSet::B => 104,
            CodeSet::C => 105,
        }
    }

    /// The symbol that switches into this set from either of the others
    fn switch_to(self) -> u8 {
        match self {
            CodeSet::A => 101,
            CodeSet::B => 100,
            CodeSet::C => 99,
        }
    }

    fn encodes(self, byte: u8) -> bool {
        match self {
            CodeSet::A => byte < b'`',
            CodeSet::B => byte >= b' ',
            CodeSet::C => false,
        }
    }

    fn value(self, byte: u8) -> u8 {
        match self {
            CodeSet::A if byte < b' ' => byte + 64,
            _ => byte - b' ',
        }
    }
}

/// Encode data as a Code 128 barcode, without quiet zones.
///
/// Code sets are switched as the data goes: runs of four or more digits are
/// packed two per symbol in set C, control characters use set A and lowercase
/// letters set B. A mod-103 check symbol and the stop pattern are always appended.
pub fn encode_code128(data: &str) -> Result<SymbolBitmap, SymbolError> {
    let values = symbol_values(data)?;

    let check = checksum(&values);

    let mut modules = Vec::with_capacity((values.len() + 1) * 11 + 13);
    for &value in values.iter().chain(std::iter::once(&check)) {
        push_pattern(&mut modules, PATTERNS[value as usize]);
    }
    push_pattern(&mut modules, STOP);

    Ok(SymbolBitmap::linear(modules))
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Set A or B for the text at the start of `bytes`, decided by the first
/// character that only one of them can encode
fn text_set(bytes: &[u8]) -> CodeSet {
    match bytes.iter().find(|&&b| b < b' ' || b >= b'`') {
        Some(&b) if b < b' ' => CodeSet::A,
        _ => CodeSet::B,
    }
}

/// The start symbol followed by the data symbols
fn symbol_values(data: &str) -> Result<Vec<u8>, SymbolError> {
    if data.is_empty() {
        return Err(SymbolError::InvalidData("Code 128 data is empty".into()));
    }
    if let Some(ch) = data.chars().find(|c| !c.is_ascii() || *c == '\u{7f}') {
        return Err(SymbolError::InvalidData(format!(
            "character {ch:?} can not be encoded in Code 128"
        )));
    }

    let bytes = data.as_bytes();
    let leading = digit_run(bytes);
    let mut set = if leading >= MIN_DIGIT_RUN || (leading == bytes.len() && leading % 2 == 0) {
        CodeSet::C
    } else {
        text_set(bytes)
    };

    let mut values = Vec::with_capacity(bytes.len() + 1);
    values.push(set.start());
    let mut i = 0;
    while i < bytes.len() {
        let run = digit_run(&bytes[i..]);
        if set == CodeSet::C {
            if run >= 2 {
                values.push((bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0'));
                i += 2;
                continue;
            }
            set = text_set(&bytes[i..]);
            values.push(set.switch_to());
        }

        // an odd run leaves its first digit in the current set
        if run >= MIN_DIGIT_RUN && run % 2 == 0 {
            set = CodeSet::C;
            values.push(set.switch_to());
            continue;
        }

        let byte = bytes[i];
        if !set.encodes(byte) {
            set = if set == CodeSet::A { CodeSet::B } else { CodeSet::A };
            values.push(set.switch_to());
        }
        values.push(set.value(byte));
        i += 1;
    }
    Ok(values)
}

/// Mod-103 weighted sum; the start symbol and the first data symbol both weigh 1
fn checksum(values: &[u8]) -> u8 {
    let sum: u32 = values
        .iter()
        .enumerate()
        .map(|(i, &v)| i.max(1) as u32 * v as u32)
        .sum();
    (sum % 103) as u8
}

fn push_pattern(modules: &mut Vec<bool>, pattern: &str) {
    for (i, width) in pattern.bytes().enumerate() {
        let dark = i % 2 == 0;
        modules.extend(std::iter::repeat(dark).take((width - b'0') as usize));
    }
}
