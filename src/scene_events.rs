use super::traits::*;
use super::event_stream::*;

///
/// Creates a stream of the events a scene raises for a particular event type
///
/// Scenes deliver events that bubble beyond any single widget; the adapter is
/// otherwise identical to `widget_events`: one fresh listener per call, 1:1
/// ordered forwarding, removal on the scene's UI thread on disposal.
///
pub fn scene_events<TScene>(scene: &TScene, event_type: TScene::EventType) -> EventStream<TScene::Event>
where TScene: 'static+Scene+Clone+Send {
    let ui_thread   = scene.ui_thread();
    let unregister  = scene.clone();

    EventStream::attach(ui_thread,
        move |feed| scene.add_scene_listener(event_type, Box::new(move |event| feed.post(event))),
        move |listener_id| unregister.remove_scene_listener(listener_id))
}
