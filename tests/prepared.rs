#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rust_decimal::Decimal;
    use squill::{Assembler, BindError, Prepared, PreparedStatement, Template, Unbound, Value};
    use squill_tests::init_logs;
    use std::str::FromStr;
    use time::macros::{date, datetime};

    #[test]
    fn prepared_typed_setters() {
        init_logs();
        let mut statement = PreparedStatement::parse(indoc! {"
            INSERT INTO trades VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "});
        assert_eq!(statement.parameters().slot_count(), 13);
        statement.set_i8(1, -8).unwrap();
        statement.set_i16(2, 16).unwrap();
        statement.set_i32(3, 32).unwrap();
        statement.set_i64(4, -64).unwrap();
        statement.set_f32(5, 0.5).unwrap();
        statement.set_f64(6, 2.75).unwrap();
        statement
            .set_decimal(7, Decimal::from_str("99.90").unwrap())
            .unwrap();
        statement.set_string(8, "Lisa's").unwrap();
        statement.set_date(9, date!(2025-07-14)).unwrap();
        statement
            .set_timestamp(10, datetime!(2025-07-14 09:15:30.250))
            .unwrap();
        statement.set_array(11, vec![Some(1), None]).unwrap();
        statement.set_struct(12, ["x", "y"]).unwrap();
        statement.set_null(13).unwrap();
        assert_eq!(
            statement.sql().unwrap(),
            indoc! {r"
                INSERT INTO trades VALUES (-8, 16, 32, -64, 0.5, 2.75, 99.90, 'Lisa\'s', '2025-07-14', '2025-07-14 09:15:30', [1,Null], ('x','y'), Null)
            "}
        );
    }

    #[test]
    fn prepared_bind_chain() {
        init_logs();
        let mut statement =
            PreparedStatement::parse("SELECT * FROM t WHERE a = ? AND b IN ? AND c = ?");
        statement
            .bind("x")
            .unwrap()
            .bind(vec![1, 2])
            .unwrap()
            .bind((1, date!(2020-02-02)))
            .unwrap();
        assert_eq!(
            statement.sql().unwrap(),
            "SELECT * FROM t WHERE a = 'x' AND b IN [1,2] AND c = (1,'2020-02-02')"
        );
    }

    #[test]
    fn prepared_bind_index_moves_cursor() {
        init_logs();
        let mut statement = PreparedStatement::parse("VALUES (?, ?, ?)");
        statement
            .bind_index("second", 2)
            .unwrap()
            .bind("third")
            .unwrap();
        let error = statement.bind("fourth").unwrap_err();
        assert_eq!(
            error.downcast_ref::<BindError>(),
            Some(&BindError::IndexOutOfRange { index: 4, slots: 3 })
        );
        statement.bind_index(1, 1).unwrap();
        assert_eq!(statement.sql().unwrap(), "VALUES (1, 'second', 'third')");
        statement.bind("overwritten").unwrap();
        assert_eq!(
            statement.sql().unwrap(),
            "VALUES (1, 'overwritten', 'third')"
        );
    }

    #[test]
    fn prepared_reuse_after_clear() {
        init_logs();
        let template = Template::parse("SELECT ?");
        let mut statement = PreparedStatement::new(template.clone());
        statement.bind(1).unwrap();
        assert_eq!(statement.sql().unwrap(), "SELECT 1");

        statement.clear_bindings().unwrap();
        assert_eq!(statement.parameters().get(1).unwrap(), None);
        let error = statement.sql().unwrap_err();
        assert_eq!(
            error.downcast_ref::<BindError>(),
            Some(&BindError::MissingBinding { index: 1 })
        );

        statement.bind("again").unwrap();
        assert_eq!(statement.sql().unwrap(), "SELECT 'again'");
        assert_eq!(statement.template(), &template);
    }

    #[test]
    fn prepared_lenient_assembler() {
        init_logs();
        let mut statement = PreparedStatement::with_assembler(
            Template::parse("SELECT ?, ?"),
            Assembler::new().with_unbound(Unbound::Null),
        );
        statement.set_object(2, Value::Text("b".into())).unwrap();
        assert_eq!(statement.sql().unwrap(), "SELECT Null, 'b'");
        statement.clear_parameters();
        assert_eq!(statement.sql().unwrap(), "SELECT Null, Null");
    }

    #[test]
    fn prepared_unsupported() {
        init_logs();
        let mut statement = PreparedStatement::parse("SELECT ?, ?");
        statement.bind(1).unwrap().bind(true).unwrap();
        let error = statement.sql().unwrap_err();
        assert_eq!(
            error.downcast_ref::<BindError>(),
            Some(&BindError::UnsupportedType { type_name: "bool" })
        );
    }

    #[test]
    fn prepared_out_of_range() {
        init_logs();
        let mut statement = PreparedStatement::parse("SELECT 1");
        let error = statement.set_i32(1, 1).unwrap_err();
        assert_eq!(
            error.downcast_ref::<BindError>(),
            Some(&BindError::IndexOutOfRange { index: 1, slots: 0 })
        );
        assert_eq!(statement.sql().unwrap(), "SELECT 1");
    }

    #[test]
    fn prepared_display() {
        init_logs();
        let statement = PreparedStatement::parse("SELECT '?', ? FROM t");
        assert_eq!(statement.to_string(), "SELECT '?', ? FROM t");
    }
}
