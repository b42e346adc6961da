/// External time source driving the tunnel, one delta per tick
pub trait TickSource {
    /// Seconds elapsed since the previous call
    fn next_delta(&mut self) -> f32;
}
