pub mod transfer_server;
