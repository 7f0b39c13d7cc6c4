pub mod radial_graph;
