// Console report layout.

use logic_nn::{format_report, logic_dataset, train_loop, Lcg, TrainConfig, Trainer};

#[test]
fn report_has_header_rows_and_dump() {
    let config = TrainConfig { iterations: 100, ..TrainConfig::default() };
    let mut lcg = Lcg::new();
    let mut trainer = Trainer::new(2, 2, 6, || lcg.next_float());
    let data = logic_dataset();
    let stats = train_loop(&mut trainer, &data, &config);

    let report = format_report(trainer.network(), &data, stats.iterations);
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[0], "Result after 100 iterations");
    assert!(lines[1].trim_start().starts_with("XOR"));
    let prefixes = ["0,0 = ", "0,1 = ", "1,0 = ", "1,1 = "];
    for (line, prefix) in lines[2..6].iter().zip(prefixes) {
        assert!(line.starts_with(prefix), "{}", line);
        let values: Vec<&str> = line[prefix.len()..].split_whitespace().collect();
        assert_eq!(values.len(), 6);
        for v in values {
            let parsed: f64 = v.parse().unwrap();
            assert!((0.0..=1.0).contains(&parsed));
            assert_eq!(v.split('.').nth(1).map(str::len), Some(3));
        }
    }
    assert_eq!(
        lines[6..].iter().step_by(2).copied().collect::<Vec<_>>(),
        vec!["weightsHidden:", "biasesHidden:", "weightsOutput:", "biasesOutput:"]
    );
}

#[test]
fn network_serializes_to_json() {
    let mut lcg = Lcg::new();
    let trainer = Trainer::new(2, 2, 6, || lcg.next_float());
    let json = serde_json::to_value(trainer.network()).unwrap();
    assert_eq!(json["hidden_count"], 2);
    assert_eq!(json["weights_output"].as_array().map(Vec::len), Some(12));
    assert_eq!(json["biases_output"][0], 0.0);
}
