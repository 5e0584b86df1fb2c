// Copyright (c) 2021 10X Genomics, Inc. All rights reserved.

// Three-letter amino acid codes.

const AA3: [(&str, u8); 25] = [
    ("ALA", b'A'),
    ("ARG", b'R'),
    ("ASN", b'N'),
    ("ASP", b'D'),
    ("CYS", b'C'),
    ("GLN", b'Q'),
    ("GLU", b'E'),
    ("GLY", b'G'),
    ("HIS", b'H'),
    ("ILE", b'I'),
    ("LEU", b'L'),
    ("LYS", b'K'),
    ("MET", b'M'),
    ("PHE", b'F'),
    ("PRO", b'P'),
    ("SER", b'S'),
    ("THR", b'T'),
    ("TRP", b'W'),
    ("TYR", b'Y'),
    ("VAL", b'V'),
    ("ASX", b'B'),
    ("GLX", b'Z'),
    ("SEC", b'U'),
    ("PYL", b'O'),
    ("UNK", b'X'),
];

pub fn aa3_to_aa1(x: &str) -> Option<u8> {
    let x = x.to_ascii_uppercase();
    AA3.iter().find(|(a, _)| *a == x).map(|(_, c)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aa3_to_aa1() {
        assert_eq!(aa3_to_aa1("Trp"), Some(b'W'));
        assert_eq!(aa3_to_aa1("GLY"), Some(b'G'));
        assert_eq!(aa3_to_aa1("XYZ"), None);
    }
}
