//! Script injected into every document of the main window.
//!
//! It exposes `window.chatShell`, routes bridge channels to their commands,
//! and sends new-window intents to the OS instead of opening a second
//! webview.

use serde_json::{json, Value};

use crate::{host_bridge::BRIDGE_CHANNELS, NEW_CHAT_EVENT};

const EXTERNAL_URL_CHANNEL: &str = "open-external-url";

/// `reveal-in-folder` -> `revealInFolder`.
pub(crate) fn method_name(channel: &str) -> String {
    let mut name = String::with_capacity(channel.len());
    let mut upper_next = false;
    for ch in channel.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            name.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            name.push(ch);
        }
    }
    name
}

/// Key the single argument of a convenience method is sent under.
fn channel_argument(channel: &str) -> Option<&'static str> {
    match channel {
        "reveal-in-folder" | "open-path" => Some("path"),
        EXTERNAL_URL_CHANNEL => Some("url"),
        _ => None,
    }
}

fn channel_table() -> Value {
    Value::Array(
        BRIDGE_CHANNELS
            .iter()
            .map(|channel| {
                json!({
                    "channel": channel.name,
                    "command": channel.command,
                    "method": method_name(channel.name),
                    "argument": channel_argument(channel.name),
                })
            })
            .collect(),
    )
}

pub(crate) fn build_bridge_script() -> String {
    let channels = channel_table();
    let new_chat_event = Value::from(NEW_CHAT_EVENT);
    let external_channel = Value::from(EXTERNAL_URL_CHANNEL);

    format!(
        r#"(() => {{
  if (window.chatShell) return;
  const channels = {channels};
  const commands = Object.fromEntries(channels.map((entry) => [entry.channel, entry.command]));
  const tauriInvoke = (command, args) => {{
    const core = window.__TAURI__ && window.__TAURI__.core;
    if (core) return core.invoke(command, args);
    const internals = window.__TAURI_INTERNALS__;
    if (internals) return internals.invoke(command, args);
    return Promise.reject(new Error('desktop bridge is unavailable'));
  }};
  const invoke = (channel, args) => {{
    const command = commands[channel];
    if (!command) return Promise.reject(new Error(`unknown bridge channel: ${{channel}}`));
    return tauriInvoke(command, args || {{}});
  }};
  const bridge = {{ invoke }};
  for (const entry of channels) {{
    bridge[entry.method] = (value) =>
      invoke(entry.channel, entry.argument ? {{ [entry.argument]: value }} : {{}});
  }}
  bridge.onNewChat = (callback) => {{
    const events = window.__TAURI__ && window.__TAURI__.event;
    if (!events) return Promise.reject(new Error('desktop events are unavailable'));
    return events.listen({new_chat_event}, () => callback());
  }};
  Object.defineProperty(window, 'chatShell', {{ value: Object.freeze(bridge) }});

  const openExternally = (raw) => {{
    try {{
      const url = new URL(String(raw), window.location.href).href;
      invoke({external_channel}, {{ url }});
    }} catch (_) {{}}
  }};
  window.open = (url) => {{
    if (url) openExternally(url);
    return null;
  }};
  document.addEventListener('click', (event) => {{
    const target = event.target instanceof Element ? event.target : null;
    const anchor = target && target.closest('a[target="_blank"]');
    if (!anchor || !anchor.href) return;
    event.preventDefault();
    openExternally(anchor.href);
  }}, true);
}})();"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_name_camel_cases_channel_names() {
        assert_eq!(method_name("app-version"), "appVersion");
        assert_eq!(method_name("platform"), "platform");
        assert_eq!(method_name("open-external-url"), "openExternalUrl");
    }

    #[test]
    fn script_routes_every_channel() {
        let script = build_bridge_script();
        for channel in BRIDGE_CHANNELS {
            assert!(
                script.contains(&format!("\"channel\":\"{}\"", channel.name)),
                "missing channel {}",
                channel.name
            );
            assert!(script.contains(&format!("\"command\":\"{}\"", channel.command)));
            assert!(script.contains(&format!("\"method\":\"{}\"", method_name(channel.name))));
        }
    }

    #[test]
    fn script_subscribes_to_new_chat_and_intercepts_new_windows() {
        let script = build_bridge_script();
        assert!(script.contains("events.listen(\"new-chat\""));
        assert!(script.contains("window.open = "));
        assert!(script.contains("a[target=\"_blank\"]"));
    }

    #[test]
    fn path_channels_send_path_argument() {
        let table = channel_table();
        let entries = table.as_array().expect("channel array");
        let reveal = entries
            .iter()
            .find(|entry| entry["channel"] == "reveal-in-folder")
            .expect("reveal entry");
        assert_eq!(reveal["argument"], "path");
        let version = entries
            .iter()
            .find(|entry| entry["channel"] == "app-version")
            .expect("version entry");
        assert!(version["argument"].is_null());
    }
}
