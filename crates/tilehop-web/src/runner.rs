use tilehop::assets::loader::{load_level_assets, AssetPaths, AssetSource, LevelAssets};
use tilehop::bridge::protocol::{FrameData, ProtocolLayout};
use tilehop::{
    EngineError, FrameClock, Game, GameConfig, GameEvent, InputEvent, InputQueue, PlayScene,
    RenderBuffer,
};

/// Generic game runner that wires a `Game` to the host frame loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see `export_game!`), because wasm-bindgen
/// cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    config: GameConfig,
    scene: Option<PlayScene>,
    input: InputQueue,
    render_buffer: RenderBuffer,
    clock: FrameClock,
    layout: ProtocolLayout,
    /// Packed frame read by the host after every tick.
    frame_buffer: Vec<f32>,
    /// Events raised during the last tick.
    events: Vec<GameEvent>,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let clock = FrameClock::new(config.fixed_dt, config.max_steps_per_frame);
        let layout = ProtocolLayout::from_config(&config);
        let frame_buffer = layout.allocate();

        Self {
            game,
            config,
            scene: None,
            input: InputQueue::new(),
            render_buffer: RenderBuffer::new(),
            clock,
            layout,
            frame_buffer,
            events: Vec::new(),
        }
    }

    /// Re-read the game's config. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.clock = FrameClock::new(self.config.fixed_dt, self.config.max_steps_per_frame);
        self.layout = ProtocolLayout::from_config(&self.config);
        self.frame_buffer = self.layout.allocate();
    }

    /// Build the scene from asset texts the host already fetched.
    pub fn load_assets(
        &mut self,
        manifest_json: &str,
        legend_json: &str,
        level_text: &str,
    ) -> Result<(), EngineError> {
        let assets = LevelAssets::from_sources(manifest_json, legend_json, level_text)?;
        self.start(&assets)
    }

    /// Fetch every asset through `source`, then build the scene.
    pub async fn load_from(
        &mut self,
        source: &dyn AssetSource,
        paths: &AssetPaths,
    ) -> Result<(), EngineError> {
        let assets = load_level_assets(source, paths).await?;
        self.start(&assets)
    }

    fn start(&mut self, assets: &LevelAssets) -> Result<(), EngineError> {
        let scene = self.game.init(&self.config, assets)?;
        log::info!("level loaded: {} entities", scene.entities().len());
        self.scene = Some(scene);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.scene.is_some()
    }

    pub fn scene(&self) -> Result<&PlayScene, EngineError> {
        self.scene.as_ref().ok_or(EngineError::NotLoaded)
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: input, fixed steps, render buffer, frame packing.
    pub fn tick(&mut self, dt: f32) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };

        scene.handle_input(&self.input.drain());

        self.events.clear();
        let steps = self.clock.accumulate(dt);
        for _ in 0..steps {
            self.game.update(scene);
            scene.update(self.clock.dt());
            self.events.extend(scene.take_events());
        }

        scene.render(&mut self.render_buffer);

        #[cfg(feature = "debug-overlay")]
        let debug_rects = scene.overlay().as_floats();
        #[cfg(not(feature = "debug-overlay"))]
        let debug_rects: &[f32] = &[];

        let camera = scene.camera();
        let frame = FrameData {
            frame: self.clock.frames(),
            instances: &self.render_buffer.instances,
            atlas_split: self.render_buffer.atlas_split,
            debug_rects,
            events: &self.events,
            camera: camera.position,
            view: camera.size,
        };
        self.layout.pack(&frame, &mut self.frame_buffer);
    }

    // ---- Pointer accessors for host memory reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.frame_buffer.as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.frame_buffer.len() as u32
    }

    pub fn frame(&self) -> &[f32] {
        &self.frame_buffer
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn atlas_split(&self) -> u32 {
        self.render_buffer.atlas_split
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        self.events.as_ptr() as *const f32
    }

    pub fn game_events_len(&self) -> u32 {
        self.events.len() as u32
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn frames(&self) -> u64 {
        self.clock.frames()
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use tilehop::assets::loader::MemorySource;
    use tilehop::bridge::protocol::{HEADER_EVENT_COUNT, HEADER_FRAME_COUNTER, HEADER_INSTANCE_COUNT};
    use tilehop::input::controller::Action;
    use tilehop::EventKind;

    const MANIFEST: &str = r#"{
        "atlases": [
            { "name": "world", "cols": 4, "rows": 1, "path": "world.png" },
            { "name": "characters", "cols": 4, "rows": 1, "path": "characters.png" }
        ],
        "sprites": {
            "ground": { "atlas": 0, "col": 0, "row": 0 },
            "mario-idle": { "atlas": 1, "col": 0, "row": 0 }
        }
    }"#;

    const LEGEND: &str = r##"{
        "tiles": { "#": { "kind": "ground", "sprite": "ground", "solid": true } },
        "spawns": { "@": "player" }
    }"##;

    const LEVEL: &str = "\n @\n####";

    struct TestGame {
        updates: u32,
    }

    impl Game for TestGame {
        fn config(&self) -> GameConfig {
            let mut config = GameConfig::default();
            config.bindings.insert("32".into(), Action::Up);
            config
        }

        fn update(&mut self, _scene: &mut PlayScene) {
            self.updates += 1;
        }
    }

    fn runner() -> GameRunner<TestGame> {
        let mut runner = GameRunner::new(TestGame { updates: 0 });
        runner.init();
        runner
    }

    #[test]
    fn tick_before_load_is_a_no_op() {
        let mut runner = runner();
        runner.tick(1.0 / 60.0);
        assert!(!runner.is_loaded());
        assert!(matches!(runner.scene(), Err(EngineError::NotLoaded)));
        assert_eq!(runner.frames(), 0);
    }

    #[test]
    fn ticks_pack_the_frame() {
        let mut runner = runner();
        runner.load_assets(MANIFEST, LEGEND, LEVEL).unwrap();
        runner.tick(1.0 / 60.0);

        assert_eq!(runner.game.updates, 1);
        // four ground tiles and the player
        assert_eq!(runner.instance_count(), 5);
        assert_eq!(runner.atlas_split(), 4);
        let frame = runner.frame();
        assert_eq!(frame.len(), runner.buffer_total_floats() as usize);
        assert_eq!(frame[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(frame[HEADER_INSTANCE_COUNT], 5.0);
        // the spawn event is delivered with the first step
        assert_eq!(frame[HEADER_EVENT_COUNT], 1.0);
        assert!(runner.events()[0].is(EventKind::Spawned));

        runner.tick(1.0 / 60.0);
        assert!(runner.events().is_empty());
    }

    #[test]
    fn input_reaches_the_scene() {
        let mut runner = runner();
        runner.load_assets(MANIFEST, LEGEND, LEVEL).unwrap();
        runner.push_input(InputEvent::KeyDown { key_code: 39 });
        for _ in 0..10 {
            runner.tick(1.0 / 60.0);
        }
        let player = runner.scene().unwrap().player().unwrap();
        assert!(player.body.vel.x > 0.0);
    }

    #[test]
    fn async_load_through_a_source() {
        let source = MemorySource::new()
            .with("assets/manifest.json", MANIFEST)
            .with("assets/legend.json", LEGEND)
            .with("assets/levels/1-1.lvl", LEVEL);
        let mut runner = runner();
        block_on(runner.load_from(&source, &AssetPaths::for_level("assets", "1-1"))).unwrap();
        assert!(runner.is_loaded());
    }

    #[test]
    fn bad_level_keeps_runner_unloaded() {
        let mut runner = runner();
        let err = runner.load_assets(MANIFEST, LEGEND, "#?#").unwrap_err();
        assert!(matches!(err, EngineError::Level(_)));
        assert!(!runner.is_loaded());
    }
}
