pub(crate) mod stdout_writer;

pub(crate) use stdout_writer::StdoutResponseWriter;
