#![no_main]

use libfuzzer_sys::fuzz_target;

use brainfudge::{scan_backward_match, scan_forward_match};

/// Partner of every bracket, found with a stack.
fn match_with_stack(data: &[u8]) -> Vec<Option<usize>> {
    let mut partners = vec![None; data.len()];
    let mut open = vec![];
    for (pos, b) in data.iter().enumerate() {
        match b {
            b'[' => open.push(pos),
            b']' => {
                if let Some(start) = open.pop() {
                    partners[start] = Some(pos);
                    partners[pos] = Some(start);
                }
            }
            _ => (),
        }
    }
    partners
}

fuzz_target!(|data: &[u8]| {
    let partners = match_with_stack(data);
    for (pos, b) in data.iter().enumerate() {
        let scanned = match b {
            b'[' => scan_forward_match(data, pos),
            b']' => scan_backward_match(data, pos),
            _ => continue,
        };
        match (scanned, partners[pos]) {
            (Ok(found), Some(expected)) => assert_eq!(found, expected),
            (Err(err), None) => assert_eq!(err.position, pos),
            (scanned, expected) => panic!("{pos}: scanned {scanned:?}, expected {expected:?}"),
        }
    }
});
