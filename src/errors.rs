// Create the Error, ErrorKind, ResultExt, and Result types
// Result is a typedef of std `Result` with the error type our own `Error`
use error_chain::*;

error_chain! {

    errors {
        // The maze dimensions or carving options cannot produce a maze.
        InvalidConfiguration(reason: String) {
            description("invalid maze configuration")
            display("invalid maze configuration: {}", reason)
        }
    }

    foreign_links {
        Io(::std::io::Error);
    }
}
