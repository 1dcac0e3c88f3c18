pub mod disk_server;
