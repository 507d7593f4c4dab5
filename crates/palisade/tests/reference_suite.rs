// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! End-to-end walk of the public surface against the reference scenarios.

use palisade::prelude::*;
use palisade::{BufferError, OpsError};

const KEY: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e,
    0x0f,
];

fn buf(content: &str) -> StrBuf {
    content.parse().expect("Failed to parse()")
}

#[test]
fn buffer_core_walk() {
    let foo = "foo";
    let bar = "bar";
    let big = "bigbigbigbigbigbigbigbig";
    let cap = 10u32;

    // Fresh buffer, then two appends.
    let mut target = StrBuf::new(cap).expect("Failed to new()");
    assert_eq!(target.capacity(), cap);
    assert_eq!(target.len(), 0);

    let written = target
        .append(format_args!("{foo}"))
        .expect("Failed to append()");
    assert_eq!(written as usize, foo.len());
    assert_eq!(target, "foo");

    let written = target
        .append(format_args!("{bar}"))
        .expect("Failed to append()");
    assert_eq!(written as usize, bar.len());
    assert_eq!(target, "foobar");

    target.reset();
    assert_eq!(target.capacity(), cap);
    assert!(target.is_empty());

    // Formatted append with mixed arguments.
    let mut target = StrBuf::new(cap).expect("Failed to new()");
    let written = target
        .append(format_args!("{}{}{}", foo, bar, 1))
        .expect("Failed to append()");
    assert_eq!(written, 7);
    assert_eq!(target, "foobar1");

    // One byte short: nothing is committed.
    let mut target = StrBuf::new(big.len() as u32 - 1).expect("Failed to new()");
    let result = target.append(format_args!("{big}"));
    assert!(matches!(result, Err(BufferError::CapacityExceeded { .. })));
    assert_eq!(target.len(), 0);

    // write() replaces content and is bounded by the full capacity.
    let mut target = StrBuf::new(cap).expect("Failed to new()");
    target.write(format_args!("{foo}")).expect("Failed to write()");
    assert_eq!(target, "foo");
    target
        .write(format_args!("{}{}{}", foo, bar, 1))
        .expect("Failed to write()");
    assert_eq!(target, "foobar1");

    target.write(format_args!("{foo}")).expect("Failed to write()");
    assert!(target.write(format_args!("{big}")).is_err());
    assert_eq!(target, "foo");

    // Duplicate: equal content, independent storage.
    let dup = target.duplicate().expect("Failed to duplicate()");
    assert_eq!(dup, target);
    assert_eq!(dup.capacity(), cap);

    // Resize unlocks a previously refused append.
    let needed = (foo.len() + big.len()) as u32;
    let mut target = StrBuf::new(cap).expect("Failed to new()");
    target
        .append(format_args!("{foo}"))
        .expect("Failed to append()");
    assert!(target.append(format_args!("{big}")).is_err());
    target.resize(needed).expect("Failed to resize()");
    target
        .append(format_args!("{big}"))
        .expect("Failed to append()");
    assert_eq!(target.capacity(), needed);
    assert_eq!(target, "foobigbigbigbigbigbigbigbig");

    // Ownership transfer.
    let mut a = buf("es un test");
    let b = buf(" y mas cosas");
    a.absorb(b).expect("Failed to absorb()");
    assert_eq!(a, " y mas cosas");

    // Plain byte-string copy.
    let mut a = buf("es un test");
    a.copy_from(b"pruebita").expect("Failed to copy_from()");
    assert_eq!(a, "pruebita");
}

#[test]
fn slicing_walk() {
    let a = buf("es un test");

    assert_eq!(a.left(4).expect("Failed to left()"), "es un");
    assert_eq!(a.right(6).expect("Failed to right()"), "test");
    assert_eq!(a.mid(3, 4).expect("Failed to mid()"), "un");

    let joined = a
        .concat(&buf(" y mas cosas"))
        .expect("Failed to concat()");
    assert_eq!(joined, "es un test y mas cosas");

    let inserted = a
        .insert(&buf(" hermoso"), 5)
        .expect("Failed to insert()");
    assert_eq!(inserted, "es un hermoso test");

    assert_eq!(a.delete(3, 5).expect("Failed to delete()"), "es test");

    // The source never changes.
    assert_eq!(a, "es un test");
}

#[test]
fn search_walk() {
    let a = buf("es un test");

    assert_eq!(a.find(b"un", 0), Some(3));
    assert_eq!(a.find(b"un", 2), Some(3));
    assert_eq!(a.find(b"ausente", 0), None);
    assert_eq!(buf("es un@test").find_byte(b'@', 0), Some(5));

    assert_eq!(
        a.replace(b"un", b"otro", 2).expect("Failed to replace()"),
        "es otro test"
    );
    assert_eq!(
        a.replace(b"un ", b"", 2).expect("Failed to replace()"),
        "es test"
    );

    assert_eq!(a.delete_sub(b"un ").expect("Failed to delete_sub()"), "es test");
    assert_eq!(
        a.strip_prefix(b"es ").expect("Failed to strip_prefix()"),
        "un test"
    );
    assert_eq!(
        a.strip_suffix(b" test").expect("Failed to strip_suffix()"),
        "es un"
    );
}

#[test]
fn case_and_trim_walk() {
    assert_eq!(buf("es Un test").to_upper().expect("Failed to to_upper()"), "ES UN TEST");
    assert_eq!(buf("ES un TEST").to_lower().expect("Failed to to_lower()"), "es un test");

    let padded = buf("   es un test   ");
    assert_eq!(padded.trim_start().expect("Failed to trim_start()"), "es un test   ");
    assert_eq!(padded.trim_end().expect("Failed to trim_end()"), "   es un test");
    assert_eq!(padded.trim().expect("Failed to trim()"), "es un test");
}

#[test]
fn equality_walk() {
    let a = buf("es un test");
    let mut b = buf("es un test");

    assert_eq!(a, b);

    b.write(format_args!("otracosa")).expect("Failed to write()");
    assert_ne!(a, b);
}

#[test]
fn validation_walk() {
    assert!(buf("-124").is_integer());
    assert!(!buf("23.89").is_integer());
    assert!(buf("23.89").is_float());
    assert!(buf("-23.89").is_float());
    assert!(buf("-124").is_signed());
    assert!(!buf("23.89").is_signed());

    assert!(!buf("String de-Prueba").is_blank());
    assert!(buf("").is_blank());
    assert!(buf("       ").is_blank());

    assert!(buf("StringdePrueba123").is_alnum(0, false));
    assert!(!buf("Stringde@Prueba123").is_alnum(0, false));
    assert!(buf("Stringde@Prueba123").is_alnum(9, true));
    assert!(!buf("String_de_Prueba_123").is_alnum(0, false));
    assert!(buf("String_de_Prueba_123").is_alnum(0, true));

    assert_eq!(
        buf("-234567").parse_long(10).expect("Failed to parse_long()"),
        -234567
    );
    assert_eq!(
        buf("-23.89").parse_double().expect("Failed to parse_double()"),
        -23.89
    );
    assert_eq!(
        buf("-23.89e5").parse_double().expect("Failed to parse_double()"),
        -2389000.0
    );
}

#[test]
fn split_walk() {
    let (before, after) = buf("String de-Prueba")
        .split_once(b"-")
        .expect("Failed to split_once()");
    assert_eq!(before, "String de");
    assert_eq!(after, "Prueba");

    let fragments = buf("String de Prueba para split_c")
        .split_all(b" ")
        .expect("Failed to split_all()");
    assert_eq!(fragments.len(), 5);
    assert_eq!(fragments[0], "String");
    assert_eq!(fragments[1], "de");
    assert_eq!(fragments[2], "Prueba");
    assert_eq!(fragments[3], "para");
    assert_eq!(fragments[4], "split_c");

    let fragments = buf("String@T0de@T0Prueba@T0para@T0split_c")
        .split_all(b"@T0")
        .expect("Failed to split_all()");
    assert_eq!(fragments.len(), 5);
    assert_eq!(fragments[0], "String");
    assert_eq!(fragments[1], "de");
    assert_eq!(fragments[2], "Prueba");
    assert_eq!(fragments[3], "para");
    assert_eq!(fragments[4], "split_c");

    assert!(matches!(
        buf("sin separador").split_once(b"-"),
        Err(OpsError::NotFound)
    ));
}

#[test]
fn hash_walk() {
    let a = buf("Esto es un Test para hash");

    let digest = hash(&a, HashVersion::Sip128, &KEY);
    assert_eq!(digest.to_string(), "1882ec9b9f416a6330aecc8b1bfafd13");

    let digest = hash(&a, HashVersion::HSip64, &KEY);
    assert_eq!(digest.to_string(), "eac1d8508e6a7f5a");

    // Same triple, same digest.
    assert_eq!(
        hash(&a, HashVersion::HSip32, &KEY),
        hash(&a, HashVersion::HSip32, &KEY)
    );
    assert_eq!(hash(&a, HashVersion::Sip64, &KEY).len(), 8);
    assert_eq!(hash(&a, HashVersion::HSip32, &KEY).len(), 4);
}
