pub mod abc_server;
