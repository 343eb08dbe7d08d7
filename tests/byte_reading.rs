use bit_cursor::{ByteCursor, Error, ExhaustionPolicy};

#[test]
fn sequential_slices() -> Result<(), Error> {
    let mut cursor = ByteCursor::new(b"ABCDEF");

    assert_eq!(cursor.request(2)?, b"AB");
    assert_eq!(cursor.request(3)?, b"CDE");
    assert_eq!(cursor.bytes_read(), 5);
    assert_eq!(cursor.remaining(), 1);

    Ok(())
}

#[test]
fn truncates_at_the_end() -> Result<(), Error> {
    let mut cursor = ByteCursor::new(b"xyz");

    assert_eq!(cursor.request(8)?, b"xyz");
    assert!(cursor.is_exhausted());

    // Exhausted is a steady state, further requests stay empty.
    assert_eq!(cursor.request(1)?, b"");
    assert_eq!(cursor.bytes_read(), 3);

    Ok(())
}

#[test]
fn zero_length_request_is_a_no_op() -> Result<(), Error> {
    let mut cursor = ByteCursor::new(b"data");

    assert_eq!(cursor.request(0)?, b"");
    assert_eq!(cursor.bytes_read(), 0);
    assert_eq!(cursor.remaining(), 4);

    Ok(())
}

#[test]
fn strict_mode_rejects_over_requests() {
    let mut cursor = ByteCursor::with_policy(b"abc", ExhaustionPolicy::Fail);

    assert!(matches!(
        cursor.request(4),
        Err(Error::Exhausted {
            requested: 4,
            remaining: 3
        })
    ));

    // A rejected request must not move the position.
    assert_eq!(cursor.bytes_read(), 0);

    assert_eq!(cursor.request(3).unwrap(), b"abc");
    assert!(cursor.is_exhausted());
}

#[test]
fn runs_borrow_from_the_source() -> Result<(), Error> {
    let data = b"borrowed".to_vec();

    let run = {
        let mut cursor = ByteCursor::new(&data);
        cursor.request(6)?
    };

    // The run outlives the cursor since it borrows the source buffer.
    assert_eq!(run, b"borrow");

    Ok(())
}
