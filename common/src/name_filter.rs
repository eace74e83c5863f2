//! Masks offensive words in player names before they reach the leaderboard.
//!
//! Matching is deliberately fuzzy: every letter of a denylist word accepts a
//! few look-alike characters and any run of characters may sit between two
//! letters, so `s.1.k` is caught as well as `sik`. Innocent names get masked
//! now and then; that is accepted.

pub const MASK: &str = "****";

pub const DENYLIST: &[&str] = &[
    "am", "göt", "meme", "31", "otuzbir", "sik", "amcık", "mcık", "yarak", "pipi",
    "69", "altmışdoku", "otuz bir", "bacı", "yar", "rock", "4m", "y4r4k", "yɐrɐk", "53r3f",
    "s3rf", "sh3rf",
];

fn look_alikes(c: char) -> Option<&'static str> {
    let class = match c {
        'a' => "aA4@",
        'm' => "mM",
        'g' => "gG",
        'o' => "oO0",
        't' => "tT7",
        'e' => "eE3",
        'r' => "rR",
        'k' => "kK",
        'c' => "cC",
        'i' => "iI1!",
        'y' => "yY",
        'b' => "bB",
        'l' => "lL1",
        'd' => "dD",
        'u' => "uU",
        'n' => "nN",
        's' => "sS5$",
        '4' => "4Aa@",
        '3' => "3Ee",
        '5' => "5Ss$",
        _ => return None,
    };
    Some(class)
}

/// Case folding used for comparison. Non-ASCII characters never fold onto
/// ASCII ones, so `ı` does not match `I`.
fn fold(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) if c.is_ascii() || !u.is_ascii() => u,
        _ => c,
    }
}

fn letter_matches(pattern: char, candidate: char) -> bool {
    let candidate = fold(candidate);
    match look_alikes(pattern) {
        Some(class) => class.chars().any(|member| fold(member) == candidate),
        None => fold(pattern) == candidate,
    }
}

/// Leftmost match of `word` in `line[from..]` as a gapped subsequence.
///
/// Taking the earliest occurrence of each letter finds the shortest match for
/// the leftmost start; if that fails no later start can succeed either.
fn find_match(line: &[char], from: usize, word: &[char]) -> Option<(usize, usize)> {
    let (&first, rest) = word.split_first()?;
    let start = (from..line.len()).find(|&i| letter_matches(first, line[i]))?;

    let mut pos = start + 1;
    for &letter in rest {
        let offset = line[pos..].iter().position(|&c| letter_matches(letter, c))?;
        pos += offset + 1;
    }
    Some((start, pos))
}

fn mask_word(line: Vec<char>, word: &[char]) -> Vec<char> {
    let mut masked = Vec::with_capacity(line.len());
    let mut pos = 0;

    while let Some((start, end)) = find_match(&line, pos, word) {
        masked.extend_from_slice(&line[pos..start]);
        masked.extend(MASK.chars());
        pos = end;
    }

    masked.extend_from_slice(&line[pos..]);
    masked
}

fn sanitize_line(line: &str) -> String {
    let mut chars: Vec<char> = line.chars().collect();
    for word in DENYLIST {
        let word: Vec<char> = word.chars().collect();
        chars = mask_word(chars, &word);
    }
    chars.into_iter().collect()
}

/// Gaps never span a line break.
pub fn sanitize(raw: &str) -> String {
    raw.split('\n')
        .map(sanitize_line)
        .collect::<Vec<_>>()
        .join("\n")
}
