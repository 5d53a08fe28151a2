mod field_tests;
mod render_token_stream_tests;
mod value_tests;
