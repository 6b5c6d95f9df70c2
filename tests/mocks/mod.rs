pub mod mock_event_log;
