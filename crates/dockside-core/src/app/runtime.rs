impl<'a, IN, CLK> KioskApp<'a, IN, CLK>
where
    IN: InputProvider,
    CLK: WallClock,
{
    /// Returns `true` on the tick the screensaver goes up.
    fn tick_idle(&mut self, now_ms: u64) -> bool {
        if !self.idle.poll(now_ms) {
            return false;
        }
        self.raise_screensaver(now_ms);
        true
    }

    fn tick_hold(&mut self, now_ms: u64) {
        match self.session.hold_mut().sample(now_ms) {
            HoldSample::Idle => {
                self.last_hold_slot = None;
            }
            HoldSample::Progress(_) => {
                let slot = now_ms / HOLD_SAMPLE_INTERVAL_MS;
                if self.last_hold_slot != Some(slot) {
                    self.last_hold_slot = Some(slot);
                    self.pending_redraw = true;
                }
            }
            HoldSample::Completed { key, on_complete } => {
                self.last_hold_slot = None;
                self.confirm_hold(key, on_complete, now_ms);
            }
        }
    }

    fn tick_clock(&mut self, now_ms: u64) {
        let slot = now_ms / CLOCK_REFRESH_MS;
        if self.last_clock_slot != Some(slot) {
            self.last_clock_slot = Some(slot);
            self.pending_redraw = true;
        }
    }
}
