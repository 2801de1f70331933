use cursorx::{Cursor, Error, ExtendedCursor, LogSettings, MemoryCursor, TypeInfo, Value};
use cursorx_test::{people, setup_if_needed, TrackingCursor};

#[test]
fn it_tags_every_row() -> anyhow::Result<()> {
    setup_if_needed();

    let mut cursor = ExtendedCursor::new(people(), "source", "import");

    assert_eq!(cursor.count(), 2);
    assert_eq!(cursor.column_names(), ["name", "age", "source"]);

    let mut rows = Vec::new();

    while cursor.move_to_next() {
        rows.push((
            cursor.get_string(0)?,
            cursor.get_int(1)?,
            cursor.get_string(2)?,
        ));
    }

    assert_eq!(
        rows,
        [
            ("Alice".to_owned(), 30, "import".to_owned()),
            ("Bob".to_owned(), 25, "import".to_owned()),
        ]
    );

    Ok(())
}

#[test]
fn it_fails_to_read_text_as_int() -> anyhow::Result<()> {
    setup_if_needed();

    let mut cursor = ExtendedCursor::new(people(), "source", "import");
    assert!(cursor.move_to_first());

    let err = cursor.get_int(2).unwrap_err();

    assert!(err.is_type_mismatch());
    assert!(matches!(err, Error::ColumnDecode { index: 2, .. }));
    assert!(cursor.get_short(2).is_err());
    assert!(cursor.get_long(2).is_err());
    assert!(cursor.get_float(2).is_err());
    assert!(cursor.get_double(2).is_err());

    Ok(())
}

#[test]
fn it_returns_a_fresh_list_of_column_names() {
    let cursor = ExtendedCursor::new(people(), "source", "import");

    let mut names = cursor.column_names();
    names.clear();
    names.push("mutated".into());

    assert_eq!(cursor.column_names(), ["name", "age", "source"]);
    assert_eq!(cursor.get_ref().column_names(), ["name", "age"]);
}

#[test]
fn it_reads_wrapped_columns_unchanged() -> anyhow::Result<()> {
    let mut plain = people();
    let mut cursor = ExtendedCursor::new(people(), "source", 1_i64);

    for position in 0..2 {
        assert!(plain.move_to_position(position));
        assert!(cursor.move_to_position(position));

        assert_eq!(cursor.get_string(0)?, plain.get_string(0)?);
        assert_eq!(cursor.get_int(1)?, plain.get_int(1)?);
        assert_eq!(cursor.get_long(1)?, plain.get_long(1)?);
        assert_eq!(cursor.get_short(1)?, plain.get_short(1)?);
        assert_eq!(cursor.is_null(0)?, plain.is_null(0)?);
        assert_eq!(cursor.get_type(1)?, plain.get_type(1)?);

        // errors come through untouched
        assert_eq!(
            cursor.get_double(1).unwrap_err().to_string(),
            plain.get_double(1).unwrap_err().to_string()
        );
    }

    Ok(())
}

#[test]
fn it_forwards_out_of_range_columns() {
    let mut cursor = ExtendedCursor::new(people(), "source", "import");
    cursor.move_to_first();

    assert!(matches!(
        cursor.get_string(3),
        Err(Error::ColumnIndexOutOfBounds { index: 3, len: 2 })
    ));
    assert!(matches!(
        cursor.is_null(10),
        Err(Error::ColumnIndexOutOfBounds { index: 10, len: 2 })
    ));
}

#[test]
fn it_reads_the_constant_on_any_row() -> anyhow::Result<()> {
    let mut cursor = ExtendedCursor::new(people(), "source", 42_i32);

    // before the first row
    assert_eq!(cursor.get_int(2)?, 42);

    cursor.move_to_last();
    assert_eq!(cursor.get_long(2)?, 42);
    assert_eq!(cursor.get_type(2)?, TypeInfo::Integer);

    // the wrapped cursor still refuses to read there
    cursor.move_to_next();
    assert!(matches!(
        cursor.get_int(1),
        Err(Error::RowOutOfRange { position: 2, count: 2 })
    ));
    assert_eq!(cursor.get_int(2)?, 42);

    Ok(())
}

#[test]
fn it_handles_null_constants() -> anyhow::Result<()> {
    let mut cursor = ExtendedCursor::new(people(), "source", Value::Null);
    cursor.move_to_first();

    assert!(cursor.is_null(2)?);
    assert!(!cursor.is_null(1)?);
    assert_eq!(cursor.try_get_extra::<Option<i32>>()?, None);
    assert!(cursor.get_string(2).is_err());

    Ok(())
}

#[test]
fn it_keeps_positions_in_sync() {
    let mut cursor = ExtendedCursor::new(TrackingCursor::new(people()), "source", "import");

    assert!(cursor.move_to_position(1));
    assert!(cursor.move_to_position(1));
    assert!(cursor.move_to_previous());
    assert!(!cursor.move_to_position(9));
    assert!(!cursor.move_to_position(-2));

    assert_eq!(cursor.get_ref().moves, [1, 1, 0, 9, -2]);
    assert_eq!(cursor.position(), cursor.get_ref().position());
    assert!(cursor.is_before_first());

    assert!(cursor.move_to_last());
    assert!(!cursor.move_to_next());
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.get_ref().position(), 2);
}

#[test]
fn it_closes_the_wrapped_cursor_once() -> anyhow::Result<()> {
    setup_if_needed();

    let tracking = TrackingCursor::new(people());
    let closes = tracking.close_counter();

    let mut cursor = ExtendedCursor::new(tracking, "source", "import");

    cursor.close()?;
    cursor.close()?;
    drop(cursor);

    assert_eq!(closes.get(), 1);

    Ok(())
}

#[test]
fn it_swallows_errors_while_closing() -> anyhow::Result<()> {
    setup_if_needed();

    let tracking = TrackingCursor::new(people()).failing_close();
    let closes = tracking.close_counter();

    let mut cursor = ExtendedCursor::new(tracking, "source", "import")
        .log_settings(LogSettings::default().log_close_errors(log::LevelFilter::Error));

    cursor.close()?;
    assert!(cursor.is_closed());
    assert!(cursor.get_ref().is_closed());

    cursor.close()?;
    assert_eq!(closes.get(), 1);

    assert!(matches!(cursor.get_string(2), Err(Error::CursorClosed)));

    Ok(())
}

#[test]
fn it_closes_on_drop() {
    let tracking = TrackingCursor::new(people()).failing_close();
    let closes = tracking.close_counter();

    drop(ExtendedCursor::new(tracking, "source", "import"));

    assert_eq!(closes.get(), 1);
}

#[test]
fn it_extends_an_extended_cursor() -> anyhow::Result<()> {
    let inner = ExtendedCursor::new(people(), "source", "import");
    let mut cursor = ExtendedCursor::new(inner, "batch", 3_i16)
        .log_settings(LogSettings::default().disable());

    assert_eq!(cursor.column_names(), ["name", "age", "source", "batch"]);
    assert!(cursor.move_to_first());
    assert_eq!(cursor.get_string(2)?, "import");
    assert_eq!(cursor.get_short(3)?, 3);
    assert_eq!(cursor.column_index_or_err("batch")?, 3);

    Ok(())
}

#[test]
fn it_extends_an_empty_cursor() -> anyhow::Result<()> {
    let mut cursor = ExtendedCursor::new(MemoryCursor::new(["id"]), "source", "import");

    assert_eq!(cursor.count(), 0);
    assert_eq!(cursor.extra_column_index(), 1);
    assert!(!cursor.move_to_first());
    assert!(cursor.is_before_first());
    assert!(cursor.is_after_last());
    assert_eq!(cursor.extra_column_name(), "source");
    assert_eq!(cursor.extra_value(), &Value::from("import"));

    Ok(())
}

#[test]
fn it_follows_the_wrapped_cursor_onto_after_last() {
    let mut cursor = ExtendedCursor::new(
        TrackingCursor::new(people()).parking_after_last(),
        "source",
        "import",
    );

    assert!(cursor.move_to_first());

    // the wrapped cursor refuses the move and parks after the last row
    assert!(!cursor.move_to_position(-1));
    assert_eq!(cursor.get_ref().position(), 2);
    assert_eq!(cursor.position(), 2);
    assert!(cursor.is_after_last());

    assert!(cursor.move_to_position(1));
    assert_eq!(cursor.position(), 1);
    assert_eq!(cursor.get_ref().position(), 1);
}

#[test]
fn it_reads_float_columns_unchanged() -> anyhow::Result<()> {
    fn measurements() -> anyhow::Result<MemoryCursor> {
        Ok(MemoryCursor::new(["weight", "ratio", "note"])
            .with_row([Value::from(1.5_f32), Value::from(0.125_f64), Value::Null])?
            .with_row([Value::Null, Value::from(2.5_f32), Value::from("x")])?)
    }

    let mut plain = measurements()?;
    let mut cursor = ExtendedCursor::new(measurements()?, "source", 0.75_f64);

    for position in 0..2 {
        assert!(plain.move_to_position(position));
        assert!(cursor.move_to_position(position));

        for column in 0..3 {
            assert_eq!(cursor.is_null(column)?, plain.is_null(column)?);
            assert_eq!(
                cursor.get_float(column).map_err(|e| e.to_string()),
                plain.get_float(column).map_err(|e| e.to_string())
            );
            assert_eq!(
                cursor.get_double(column).map_err(|e| e.to_string()),
                plain.get_double(column).map_err(|e| e.to_string())
            );
        }

        assert_eq!(cursor.get_double(3)?, 0.75);
        assert!(!cursor.is_null(3)?);
    }

    assert!(cursor.move_to_first());
    assert_eq!(cursor.get_float(0)?, 1.5);
    assert_eq!(cursor.get_double(0)?, 1.5);
    assert_eq!(cursor.get_double(1)?, 0.125);
    assert!(cursor.is_null(2)?);

    Ok(())
}
