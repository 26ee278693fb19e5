use crate::engine::catalog::BirdCatalog;
use crate::engine::habitat::environment::hex_string;
use crate::engine::habitat::{EnvironmentSummary, PlacedBird};
use crate::engine::loading::catalog_loader::{CatalogSource, CatalogUpdate};
use crate::engine::scene::{PlacedBirds, SceneBuilt};
use crate::engine::systems::fps_tracking::current_fps;
use crate::tools::bird_picker::{BirdSelected, SelectionRequest};
use bevy::diagnostic::DiagnosticsStore;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

#[cfg(target_arch = "wasm32")]
use web_sys::{MessageEvent, window};

/// JSON-RPC 2.0 request structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub method: String,
    #[serde(default)]
    pub params: Value,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 response structure.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcResponse {
    pub jsonrpc: String,
    pub result: Option<Value>,
    pub error: Option<RpcError>,
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 notification structure for one-way communication.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RpcNotification {
    pub jsonrpc: String,
    pub method: String,
    pub params: Value,
}

/// JSON-RPC error structure following specification.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
    pub data: Option<Value>,
}

/// Resource managing bidirectional RPC communication between the frontend and Bevy.
#[derive(Resource, Default)]
pub struct WebRpcInterface {
    outgoing_notifications: Vec<RpcNotification>,
    outgoing_responses: Vec<RpcResponse>,
}

impl WebRpcInterface {
    /// Send notification to the frontend without expecting a response.
    pub fn send_notification(&mut self, method: &str, params: Value) {
        self.outgoing_notifications.push(RpcNotification {
            jsonrpc: "2.0".to_string(),
            method: method.to_string(),
            params,
        });
    }

    fn queue_response(&mut self, response: RpcResponse) {
        self.outgoing_responses.push(response);
    }

    /// Notifications queued this frame, not yet posted.
    pub fn pending_notifications(&self) -> &[RpcNotification] {
        &self.outgoing_notifications
    }
}

/// Plugin establishing the postMessage bridge for iframe deployment.
pub struct WebRpcPlugin;

impl Plugin for WebRpcPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WebRpcInterface>()
            .add_event::<IncomingRpcMessage>()
            .add_systems(
                Update,
                (
                    process_incoming_messages,
                    handle_rpc_messages,
                    forward_bird_selected,
                    forward_scene_built,
                    send_outgoing_messages,
                )
                    .chain(),
            );

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, setup_message_listener);
    }
}

#[cfg(target_arch = "wasm32")]
fn setup_message_listener(mut commands: Commands) {
    use std::sync::Arc;
    use std::sync::Mutex;

    let message_queue: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let queue_clone = message_queue.clone();

    let closure = Closure::wrap(Box::new(move |event: MessageEvent| {
        if let Ok(data) = event.data().dyn_into::<js_sys::JsString>() {
            let message_str: String = data.into();

            if message_str.contains("jsonrpc") {
                if let Ok(mut queue) = queue_clone.lock() {
                    queue.push(message_str);
                }
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);

    let Some(window) = window() else {
        error!("Window object not available, RPC listener not installed");
        return;
    };
    if let Err(e) =
        window.add_event_listener_with_callback("message", closure.as_ref().unchecked_ref())
    {
        error!("Failed to register message listener: {:?}", e);
        return;
    }

    // Ownership moves to JS; the listener lives as long as the page.
    closure.forget();
    commands.insert_resource(MessageQueue(message_queue));
}

#[derive(Resource)]
struct MessageQueue(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

/// Raw message received from the frontend.
#[derive(Event)]
struct IncomingRpcMessage {
    content: String,
}

fn process_incoming_messages(
    message_queue: Option<Res<MessageQueue>>,
    mut message_events: EventWriter<IncomingRpcMessage>,
) {
    let Some(queue_res) = message_queue else {
        return;
    };

    let messages = if let Ok(mut queue) = queue_res.0.lock() {
        std::mem::take(&mut *queue)
    } else {
        Vec::new()
    };

    for message_str in messages {
        message_events.write(IncomingRpcMessage {
            content: message_str,
        });
    }
}

fn handle_rpc_messages(
    mut events: EventReader<IncomingRpcMessage>,
    diagnostics: Res<DiagnosticsStore>,
    placed: Res<PlacedBirds>,
    mut rpc_interface: ResMut<WebRpcInterface>,
    mut selection_requests: EventWriter<SelectionRequest>,
    mut catalog_updates: EventWriter<CatalogUpdate>,
) {
    for event in events.read() {
        match serde_json::from_str::<RpcRequest>(&event.content) {
            Ok(request) => {
                rpc_interface.send_notification(
                    "debug_message",
                    json!({ "message": format!("Processing method: {}", request.method) }),
                );

                if let Some(response) = handle_rpc_request(
                    &request,
                    &diagnostics,
                    &placed,
                    &mut selection_requests,
                    &mut catalog_updates,
                ) {
                    rpc_interface.queue_response(response);
                }
            }
            Err(parse_error) => {
                warn!("Dropping malformed RPC message: {parse_error}");
                rpc_interface.send_notification(
                    "debug_message",
                    json!({ "message": format!("Parse error: {}", parse_error) }),
                );
            }
        }
    }
}

/// Dispatches one request. Requests without an id are notifications and get
/// no response, but their side effects still happen.
fn handle_rpc_request(
    request: &RpcRequest,
    diagnostics: &DiagnosticsStore,
    placed: &PlacedBirds,
    selection_requests: &mut EventWriter<SelectionRequest>,
    catalog_updates: &mut EventWriter<CatalogUpdate>,
) -> Option<RpcResponse> {
    let params = &request.params;
    let result = match request.method.as_str() {
        "get_fps" => Ok(json!({ "fps": current_fps(diagnostics) })),
        "get_environment_summary" => Ok(environment_summary_json(placed)),
        "get_bird" => handle_get_bird(params, placed),
        "select_bird" => handle_select_bird(params, placed, selection_requests),
        "clear_selection" => {
            selection_requests.write(SelectionRequest::Clear);
            Ok(json!({ "success": true }))
        }
        "load_catalog" => handle_load_catalog(params, catalog_updates),
        "play_bird_audio" => handle_play_bird_audio(params, placed),
        _ => {
            warn!("Unknown RPC method: {}", request.method);
            let id = request.id.clone()?;
            return Some(create_error_response(
                id,
                -32601,
                "Method not found",
                Some(json!({ "method": request.method })),
            ));
        }
    };

    let id = request.id.clone()?;
    Some(match result {
        Ok(result_value) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: Some(result_value),
            error: None,
            id: Some(id),
        },
        Err(error) => RpcResponse {
            jsonrpc: "2.0".to_string(),
            result: None,
            error: Some(error),
            id: Some(id),
        },
    })
}

#[derive(Deserialize)]
struct BirdIdParams {
    id: String,
}

fn bird_id_param(params: &Value) -> Result<String, RpcError> {
    serde_json::from_value::<BirdIdParams>(params.clone())
        .map(|parsed| parsed.id)
        .map_err(|_| RpcError::invalid_params("Expected 'id' parameter"))
}

fn find_bird<'a>(placed: &'a PlacedBirds, id: &str) -> Result<&'a PlacedBird, RpcError> {
    placed
        .by_id(id)
        .ok_or_else(|| RpcError::invalid_params(&format!("Unknown bird: {id}")))
}

fn handle_get_bird(params: &Value, placed: &PlacedBirds) -> Result<Value, RpcError> {
    let id = bird_id_param(params)?;
    placed_bird_json(find_bird(placed, &id)?)
}

fn handle_select_bird(
    params: &Value,
    placed: &PlacedBirds,
    selection_requests: &mut EventWriter<SelectionRequest>,
) -> Result<Value, RpcError> {
    let id = bird_id_param(params)?;
    find_bird(placed, &id)?;

    selection_requests.write(SelectionRequest::Select {
        bird_id: id.clone(),
    });
    info!("Selection requested by frontend: {id}");

    Ok(json!({ "success": true, "id": id }))
}

fn handle_load_catalog(
    params: &Value,
    catalog_updates: &mut EventWriter<CatalogUpdate>,
) -> Result<Value, RpcError> {
    let catalog = catalog_from_params(params)?;
    let bird_count = catalog.bird_count();
    let family_count = catalog.families.len();

    info!("Frontend pushed a catalog: {bird_count} birds in {family_count} families");
    catalog_updates.write(CatalogUpdate {
        catalog,
        source: CatalogSource::Frontend,
    });

    Ok(json!({
        "success": true,
        "birdCount": bird_count,
        "familyCount": family_count,
    }))
}

/// Parses and validates `{ "birdFamilies": [...] }`.
fn catalog_from_params(params: &Value) -> Result<BirdCatalog, RpcError> {
    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct LoadCatalogParams {
        bird_families: BirdCatalog,
    }

    let parsed = serde_json::from_value::<LoadCatalogParams>(params.clone()).map_err(|e| {
        RpcError::invalid_params(&format!("Expected 'birdFamilies' array: {e}"))
    })?;

    parsed.bird_families.validate().map_err(|e| {
        warn!("Rejected pushed catalog: {e}");
        RpcError::invalid_params(&e.to_string())
    })?;

    Ok(parsed.bird_families)
}

/// Audio playback belongs to the frontend; the engine only resolves the URL.
fn handle_play_bird_audio(params: &Value, placed: &PlacedBirds) -> Result<Value, RpcError> {
    let id = bird_id_param(params)?;
    let bird = find_bird(placed, &id)?;

    if bird.record.audio_url.is_empty() {
        return Err(RpcError::invalid_params(&format!(
            "Bird {id} has no audio recording"
        )));
    }

    info!("Audio requested for {}: {}", bird.record.name, bird.record.audio_url);
    Ok(json!({ "id": id, "audioUrl": bird.record.audio_url }))
}

fn vec3_json(v: Vec3) -> Value {
    json!([v.x, v.y, v.z])
}

/// Catalog record plus its placement, in the frontend's camelCase shape.
pub fn placed_bird_json(bird: &PlacedBird) -> Result<Value, RpcError> {
    let mut value = serde_json::to_value(&bird.record)
        .map_err(|e| RpcError::internal_error(&e.to_string()))?;

    if let Value::Object(map) = &mut value {
        map.insert("familyName".into(), json!(bird.family_name));
        map.insert("familyColor".into(), json!(bird.family_colour));
        map.insert("habitatZone".into(), json!(bird.habitat.key()));
        map.insert("position".into(), vec3_json(bird.position));
        map.insert(
            "environmentColor".into(),
            json!(hex_string(bird.environment_colour)),
        );
        map.insert("animation".into(), json!(bird.animation.name()));
        map.insert("index".into(), json!(bird.index));
    }

    Ok(value)
}

fn summary_entry_json(env: &EnvironmentSummary) -> Value {
    json!({
        "key": env.key,
        "name": env.name,
        "color": hex_string(env.colour),
        "anchor": vec3_json(env.anchor),
        "size": vec3_json(env.size),
        "birdCount": env.bird_count,
        "pattern": env.pattern.name(),
        "animation": env.animation.name(),
    })
}

fn environment_summary_json(placed: &PlacedBirds) -> Value {
    let environments: Vec<Value> = placed.summary().iter().map(summary_entry_json).collect();
    json!({
        "generation": placed.generation,
        "birdCount": placed.birds.len(),
        "environments": environments,
    })
}

fn forward_bird_selected(
    mut selections: EventReader<BirdSelected>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for selection in selections.read() {
        match placed_bird_json(&selection.bird) {
            Ok(bird) => rpc_interface.send_notification("bird_selected", json!({ "bird": bird })),
            Err(e) => error!("Could not serialise selected bird: {}", e.message),
        }
    }
}

fn forward_scene_built(
    mut built: EventReader<SceneBuilt>,
    placed: Res<PlacedBirds>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for scene in built.read() {
        let mut params = environment_summary_json(&placed);
        if let Value::Object(map) = &mut params {
            map.insert("source".into(), json!(scene.source));
        }
        rpc_interface.send_notification("scene_built", params);
    }
}

fn create_error_response(id: Value, code: i32, message: &str, data: Option<Value>) -> RpcResponse {
    RpcResponse {
        jsonrpc: "2.0".to_string(),
        result: None,
        error: Some(RpcError {
            code,
            message: message.to_string(),
            data,
        }),
        id: Some(id),
    }
}

/// Send queued notifications and responses to the frontend.
fn send_outgoing_messages(mut rpc_interface: ResMut<WebRpcInterface>) {
    for notification in rpc_interface.outgoing_notifications.drain(..) {
        send_message_to_parent(&notification);
    }

    // Responses second to keep notification order.
    for response in rpc_interface.outgoing_responses.drain(..) {
        send_message_to_parent(&response);
    }
}

fn send_message_to_parent<T: Serialize>(message: &T) {
    #[cfg(target_arch = "wasm32")]
    {
        match serde_json::to_string(message) {
            Ok(json) => {
                if let Some(window) = window() {
                    if let Some(parent) = window.parent().ok().flatten() {
                        if let Err(e) = parent.post_message(&JsValue::from_str(&json), "*") {
                            error!("Failed to send message to parent: {:?}", e);
                        }
                    } else {
                        warn!("No parent window available for message transmission");
                    }
                } else {
                    error!("Window object not available");
                }
            }
            Err(e) => {
                error!("Failed to serialize message: {}", e);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
    }
}

impl RpcError {
    pub fn invalid_params(message: &str) -> Self {
        Self {
            code: -32602,
            message: message.to_string(),
            data: None,
        }
    }

    pub fn internal_error(message: &str) -> Self {
        Self {
            code: -32603,
            message: message.to_string(),
            data: None,
        }
    }
}
