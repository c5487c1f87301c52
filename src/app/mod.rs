// Application layer: wires adapters and core into runnable surfaces.

pub mod server;
