//! Property-based tests for rust_structured_logger using proptest

use proptest::prelude::*;
use rust_structured_logger::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Verbose),
        Just(LogLevel::Debug),
        Just(LogLevel::Information),
        Just(LogLevel::Warning),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn memory_logger(builder: LoggerBuilder) -> (Logger, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let logger = builder.sink(Arc::clone(&sink)).build().unwrap();
    (logger, sink)
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let lower: LogLevel = level.to_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, lower);
    }

    /// Test that LogLevel ordering matches discriminant order
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let val1 = level1 as u8;
        let val2 = level2 as u8;

        prop_assert_eq!(level1 <= level2, val1 <= val2);
        prop_assert_eq!(level1 < level2, val1 < val2);
    }
}

// ============================================================================
// Level Gate Tests
// ============================================================================

proptest! {
    /// Levels below the floor never reach the sink; the rest always do
    #[test]
    fn test_floor_without_switch(floor in any_level(), level in any_level()) {
        let (logger, sink) = memory_logger(Logger::builder().min_level(floor));

        logger.write(level, "gate", ()).unwrap();

        prop_assert_eq!(logger.is_enabled(level), level >= floor);
        prop_assert_eq!(sink.len(), usize::from(level >= floor));
    }

    /// With a switch attached, enabled iff the level passes both floor and switch
    #[test]
    fn test_floor_and_switch(
        floor in any_level(),
        initial in any_level(),
        updated in any_level(),
        level in any_level(),
    ) {
        let switch = LevelSwitch::new(initial);
        let (logger, sink) = memory_logger(
            Logger::builder().min_level(floor).level_switch(switch.clone()),
        );

        prop_assert_eq!(logger.is_enabled(level), level >= floor && level >= initial);

        switch.set_minimum_level(updated);
        prop_assert_eq!(logger.is_enabled(level), level >= floor && level >= updated);

        logger.write(level, "after update", ()).unwrap();
        prop_assert_eq!(sink.len(), usize::from(level >= floor && level >= updated));
    }

    /// A derived logger never lets through what its root would reject
    #[test]
    fn test_derived_chain_respects_root(
        floor in any_level(),
        level in any_level(),
        depth in 1usize..5,
    ) {
        let (root, sink) = memory_logger(Logger::builder().min_level(floor));
        let mut logger = root.clone();
        for i in 0..depth {
            logger = logger.for_source_context(&format!("Layer{}", i));
        }

        logger.write(level, "deep", ()).unwrap();
        prop_assert_eq!(sink.len(), usize::from(level >= floor));
    }
}

// ============================================================================
// Template Binding Tests
// ============================================================================

proptest! {
    /// Named holes bind in order and render every argument
    #[test]
    fn test_named_holes_bind_values(values in prop::collection::vec(any::<i64>(), 1..6)) {
        let template: String = (0..values.len())
            .map(|i| format!("{{P{}}}", i))
            .collect::<Vec<_>>()
            .join(" ");
        let captures: Vec<CaptureValue> = values.iter().copied().map(CaptureValue::from).collect();

        let (logger, sink) = memory_logger(Logger::builder());
        logger.info(&template, captures).unwrap();

        let event = &sink.events()[0];
        for (i, value) in values.iter().enumerate() {
            let name = format!("P{}", i);
            prop_assert_eq!(event.property(&name), Some(&PropertyValue::from(*value)));
        }
        let expected: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        prop_assert_eq!(event.render_message(), expected.join(" "));
    }

    /// A bare sequence is always one captured value, whatever its length
    #[test]
    fn test_bare_sequence_not_spread(items in prop::collection::vec(any::<i32>(), 0..20)) {
        let (logger, sink) = memory_logger(Logger::builder());
        logger.info("{Items}", CaptureValue::sequence(items.clone())).unwrap();

        let event = &sink.events()[0];
        prop_assert_eq!(event.properties().len(), 1);
        match event.property("Items") {
            Some(PropertyValue::Sequence(captured)) => prop_assert_eq!(captured.len(), items.len()),
            other => prop_assert!(false, "Expected sequence, got {:?}", other),
        }
    }

    /// Text without braces parses to itself
    #[test]
    fn test_plain_text_renders_verbatim(text in "[a-zA-Z0-9 .,:;!?-]{1,64}") {
        let template = MessageTemplate::parse(&text);
        prop_assert_eq!(template.render(|_| None), text);
    }
}
