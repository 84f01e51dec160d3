// DOM names shared by the web frontend.

// Element mounted automatically on start, if present
pub const DEFAULT_SCENE_ID: &str = "scene";

// Class marking a moving child of a scene
pub const LAYER_CLASS: &str = "layer";

// Per-layer multiplier, read as `data-depth`
pub const DEPTH_ATTRIBUTE: &str = "depth";

// Global constructor probed for tilt support
pub const ORIENTATION_EVENT_CONSTRUCTOR: &str = "DeviceOrientationEvent";

// Event names
pub const EVENT_ORIENTATION: &str = "deviceorientation";
pub const EVENT_POINTER_MOVE: &str = "mousemove";
pub const EVENT_RESIZE: &str = "resize";

// CSS used to promote elements to their own compositing layer
pub const ACCELERATE_STYLES: [(&str, &str); 3] = [
    ("transform", "translate3d(0,0,0)"),
    ("transform-style", "preserve-3d"),
    ("backface-visibility", "hidden"),
];

// Probe value for 3D transform detection
pub const TRANSLATE3D_PROBE: &str = "translate3d(1px,1px,1px)";
