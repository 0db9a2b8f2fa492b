use std::collections::VecDeque;

use profiler_connector::{
    read_rows, Attribute, ColumnBatch, Connector, ConnectorError, ConnectorSession, Record,
    RowMetrics,
};

/// Replays pre-recorded reads: each entry is what one call to
/// `read_rows_into` appends, `None` meaning the source reports no data.
struct ScriptedConnector {
    attributes: Vec<Attribute>,
    reads: VecDeque<Option<Vec<Vec<&'static str>>>>,
    requested: Vec<usize>,
}

impl ScriptedConnector {
    fn new(columns: &[&str], reads: Vec<Option<Vec<Vec<&'static str>>>>) -> Self {
        Self {
            attributes: columns.iter().map(|c| Attribute::new(*c, "scripted")).collect(),
            reads: reads.into(),
            requested: Vec::new(),
        }
    }
}

impl Connector for ScriptedConnector {
    fn db_name(&self) -> &str {
        "script"
    }

    fn path(&self) -> &str {
        "script://"
    }

    fn source_name(&self) -> &str {
        "scripted"
    }

    fn init_connector(&mut self) -> Result<(), ConnectorError> {
        Ok(())
    }

    fn destroy_connector(&mut self) {}

    fn attributes(&mut self) -> Result<Vec<Attribute>, ConnectorError> {
        Ok(self.attributes.clone())
    }

    fn read_rows_into(&mut self, num: usize, out: &mut Vec<Record>) -> Result<bool, ConnectorError> {
        self.requested.push(num);
        match self.reads.pop_front().flatten() {
            Some(rows) => {
                out.extend(rows.into_iter().map(|r| r.into_iter().collect::<Record>()));
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn key_names(batch: &ColumnBatch) -> Vec<&str> {
    batch.attributes().iter().map(|a| a.name()).collect()
}

#[test]
fn drops_short_record_and_counts_it() {
    let mut conn = ScriptedConnector::new(
        &["A", "B", "C"],
        vec![Some(vec![vec!["1", "2", "3"], vec!["4", "5"]])],
    );
    let mut metrics = RowMetrics::new();

    let batch = read_rows(&mut conn, 2, &mut metrics).unwrap().unwrap();

    assert_eq!(key_names(&batch), ["A", "B", "C"]);
    assert_eq!(batch.column_by_name("A").unwrap(), ["1"]);
    assert_eq!(batch.column_by_name("B").unwrap(), ["2"]);
    assert_eq!(batch.column_by_name("C").unwrap(), ["3"]);
    assert_eq!(metrics, RowMetrics { accepted: 1, rejected: 1 });
}

#[test]
fn data_read_with_no_records_is_an_empty_batch() {
    let mut conn = ScriptedConnector::new(&["A", "B"], vec![Some(Vec::new())]);

    let batch = read_rows(&mut conn, 10, &mut ()).unwrap().unwrap();

    assert_eq!(key_names(&batch), ["A", "B"]);
    assert!(batch.column_by_name("A").unwrap().is_empty());
    assert!(batch.column_by_name("B").unwrap().is_empty());
}

#[test]
fn no_data_returns_none_for_any_batch_size() {
    for num in [1, 7, 10_000] {
        let mut conn = ScriptedConnector::new(&["A"], vec![None]);
        assert!(read_rows(&mut conn, num, &mut ()).unwrap().is_none());
        assert_eq!(conn.requested, [num]);
    }
}

#[test]
fn repeated_calls_after_exhaustion_stay_exhausted() {
    let mut conn = ScriptedConnector::new(&["A"], vec![Some(vec![vec!["1"]])]);
    let mut metrics = RowMetrics::new();

    assert!(read_rows(&mut conn, 5, &mut metrics).unwrap().is_some());
    for _ in 0..3 {
        assert!(read_rows(&mut conn, 5, &mut metrics).unwrap().is_none());
    }
    assert_eq!(metrics, RowMetrics { accepted: 1, rejected: 0 });
}

#[test]
fn values_keep_row_and_column_order_across_batches() {
    let mut conn = ScriptedConnector::new(
        &["id", "name", "city"],
        vec![
            Some(vec![
                vec!["1", "ada", "london"],
                vec!["2", "alan"],
                vec!["3", "grace", "arlington"],
            ]),
            Some(vec![
                vec!["4", "edsger", "rotterdam", "extra"],
                vec!["5", "barbara", "boston"],
            ]),
            None,
        ],
    );
    let mut metrics = RowMetrics::new();

    let first = read_rows(&mut conn, 3, &mut metrics).unwrap().unwrap();
    assert_eq!(first.column_by_name("id").unwrap(), ["1", "3"]);
    assert_eq!(first.column_by_name("name").unwrap(), ["ada", "grace"]);
    assert_eq!(first.column_by_name("city").unwrap(), ["london", "arlington"]);

    let second = read_rows(&mut conn, 3, &mut metrics).unwrap().unwrap();
    assert_eq!(second.column_by_name("id").unwrap(), ["5"]);
    assert_eq!(key_names(&second), ["id", "name", "city"]);

    for batch in [&first, &second] {
        let accepted = batch.num_rows();
        assert!(batch.iter().all(|(_, values)| values.len() == accepted));
    }

    assert!(read_rows(&mut conn, 3, &mut metrics).unwrap().is_none());
    assert_eq!(metrics, RowMetrics { accepted: 3, rejected: 2 });
}

#[test]
fn session_counts_rows_over_its_lifetime() {
    let conn = ScriptedConnector::new(
        &["A", "B"],
        vec![
            Some(vec![vec!["1", "2"], vec!["3"]]),
            Some(vec![vec!["4", "5", "6"]]),
            None,
        ],
    );
    let mut session = ConnectorSession::open(conn).unwrap();

    let mut batches = 0;
    while let Some(batch) = session.read_rows(2).unwrap() {
        assert_eq!(key_names(&batch), ["A", "B"]);
        batches += 1;
    }

    assert_eq!(batches, 2);
    assert_eq!(session.close(), RowMetrics { accepted: 1, rejected: 2 });
}
