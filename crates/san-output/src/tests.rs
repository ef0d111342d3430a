//! Integration tests for san-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use san_core::{RunConfig, Scenario};
    use san_model::{SimulationRecord, simulate};
    use san_traffic::{LoadSchedule, SpikePolicy};

    use crate::csv::{CsvSink, SIM_RESULTS_FILE, write_records_csv};
    use crate::writer::RecordWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn sample_records() -> Vec<SimulationRecord> {
        let config = RunConfig::new(10.0, 42, true);
        simulate(
            &Scenario::traditional_ethernet(),
            &config,
            &LoadSchedule::phase2_default(),
            SpikePolicy::default(),
        )
        .unwrap()
    }

    #[test]
    fn file_created_with_header() {
        let dir = tmp();
        let mut sink = CsvSink::new(dir.path()).unwrap();
        sink.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SIM_RESULTS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "scenario",
                "encryption",
                "timestamp",
                "load_class",
                "load_mb_s",
                "utilization",
                "queue_delay_s",
                "throughput_mb_s",
                "effective_mb_s",
                "dropped",
                "enc_delay_s",
                "inflation_factor",
                "latency_s",
            ]
        );
    }

    #[test]
    fn round_trips_through_serde() {
        let dir = tmp();
        let records = sample_records();
        write_records_csv(dir.path(), &records).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(SIM_RESULTS_FILE)).unwrap();
        let read_back: Vec<SimulationRecord> =
            rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(read_back, records);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut sink = CsvSink::new(dir.path()).unwrap();
        sink.write_records(&sample_records()).unwrap();
        sink.finish().unwrap();
        sink.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_recoverable_error() {
        let result = CsvSink::new(std::path::Path::new("/nonexistent/sub/dir"));
        assert!(result.is_err());
    }
}
