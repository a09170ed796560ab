pub mod quiniela_pipeline;
