pub mod d400_live_stats;
