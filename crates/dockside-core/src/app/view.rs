impl<'a, IN, CLK> KioskApp<'a, IN, CLK>
where
    IN: InputProvider,
    CLK: WallClock,
{
    pub fn new(
        graph: StepGraph<'a>,
        input: IN,
        clock: CLK,
        mut config: KioskConfig<'a>,
        now_ms: u64,
    ) -> Self {
        config.default_hold_ms = config.default_hold_ms.max(1);
        config.idle_timeout_ms = config.idle_timeout_ms.max(1);

        let mut idle = IdleController::new(config.idle_timeout_ms, config.dismiss_policy);
        idle.start(now_ms);
        let session = SessionState::new(graph.start_index());

        debug!(
            "kiosk: start step={} steps={} idle_timeout_ms={} policy={:?}",
            graph.start().id,
            graph.len(),
            config.idle_timeout_ms,
            config.dismiss_policy
        );

        Self {
            graph,
            input,
            clock,
            config,
            session,
            idle,
            pending_redraw: true,
            transition: None,
            flash_pulse: None,
            last_hold_slot: None,
            last_clock_slot: None,
        }
    }

    pub fn tick(&mut self, now_ms: u64) -> TickResult {
        // Deadlines due at `now_ms` fire before this tick's input is applied.
        let cover_raised = self.tick_idle(now_ms);
        self.tick_hold(now_ms);
        self.process_inputs(now_ms, cover_raised);
        self.tick_clock(now_ms);

        let animating =
            self.transition_frame(now_ms).is_some() || self.flash_frame(now_ms).is_some();
        if self.pending_redraw || animating {
            self.pending_redraw = false;
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    pub fn with_screen<F>(&self, now_ms: u64, f: F)
    where
        F: FnOnce(Screen<'_>),
    {
        let wall = self.clock.now();
        let time = time_label(wall);
        let date = date_label(wall);
        let footer = FooterView {
            time: time.as_str(),
            date: date.as_str(),
        };
        let animation = self.transition_frame(now_ms);

        if self.idle.is_showing() {
            f(Screen::Screensaver {
                door_label: self.config.door_label,
                hint: SCREENSAVER_HINT,
                footer,
                animation,
            });
            return;
        }

        let step_index = self.session.current();
        let step = self.graph.step(step_index);
        let gates = gate::resolve(step_index, step, self.session.completed_holds());
        let hold = self.session.hold_progress();
        let flash = self.session.flash_key();
        let flash_frame = self.flash_frame(now_ms);

        let mut controls = [ControlView::default(); MAX_CONTROLS_PER_STEP];
        let mut count = 0usize;
        for (position, control) in step.controls.iter().enumerate().take(MAX_CONTROLS_PER_STEP) {
            let key = ControlKey::new(step_index, position as u8);
            let gate = gates.get(position).copied().unwrap_or(ControlGate::Locked);
            let hold_pct = match hold {
                Some(progress) if progress.key == key => progress.percent,
                _ if gate == ControlGate::HoldConfirmed => 100,
                _ => 0,
            };
            let flashed = flash == Some(key);

            controls[count] = ControlView {
                visual: control.visual,
                kind: if control.is_hold() {
                    ControlKind::Hold
                } else {
                    ControlKind::Tap
                },
                gate,
                hold_pct,
                flash: if flashed { flash_frame } else { None },
                flashed,
            };
            count += 1;
        }

        let media = match step.kind {
            StepKind::Linear { media } => StepMedia::Looping(media),
            StepKind::Choice { left, right } => StepMedia::Split {
                left: ChoiceView {
                    media: left.media,
                    label: left.label,
                    hint: CHOICE_HINT,
                },
                right: ChoiceView {
                    media: right.media,
                    label: right.label,
                    hint: CHOICE_HINT,
                },
            },
        };

        f(Screen::Step {
            title: self.config.title,
            step_label: step.label,
            media,
            controls: &controls[..count],
            footer,
            animation,
        });
    }

    pub fn with_input_mut<R, F>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut IN) -> R,
    {
        f(&mut self.input)
    }

    pub fn current_step(&self) -> &'a Step<'a> {
        self.graph.step(self.session.current())
    }

    /// Oldest visited step first.
    pub fn history_ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.session
            .history()
            .iter()
            .map(move |index| self.graph.step(index).id)
    }

    pub fn history_len(&self) -> usize {
        self.session.history().len()
    }

    pub fn hold_progress(&self) -> Option<HoldProgress> {
        self.session.hold_progress()
    }

    pub fn is_locked(&self, position: usize) -> bool {
        let step_index = self.session.current();
        gate::is_locked(
            step_index,
            self.graph.step(step_index),
            position,
            self.session.completed_holds(),
        )
    }

    pub fn is_hold_confirmed(&self, position: usize) -> bool {
        self.session
            .completed_holds()
            .contains(ControlKey::new(self.session.current(), position as u8))
    }

    /// Position of the control currently carrying the just-unlocked highlight.
    pub fn flashed_position(&self) -> Option<u8> {
        self.session.flash_key().map(|key| key.position)
    }

    pub const fn is_screensaver_showing(&self) -> bool {
        self.idle.is_showing()
    }

    pub const fn config(&self) -> &KioskConfig<'a> {
        &self.config
    }

    /// Stops both timers; nothing fires after this.
    pub fn shutdown(&mut self) {
        let hold = self.session.hold_mut().cancel();
        let idle = self.idle.stop();
        debug!(
            "kiosk: shutdown hold_cancelled={} idle_cancelled={}",
            hold.is_some(),
            idle
        );
    }
}
