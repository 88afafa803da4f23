//! 画像スロットコンポーネント（front / back / side）

use freshtech_common::{mime_type_for_extension, ExtractionState, ImageFile, SlotLabel};
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader, HtmlInputElement, Url};

#[component]
pub fn UploadSlot(label: SlotLabel, state: RwSignal<ExtractionState>) -> impl IntoView {
    let input_id = format!("{}-image", label);
    // プレビューは選択したFileのObject URL（画像本体を再エンコードしない）
    let preview = RwSignal::new(None::<String>);
    let is_set = Memo::new(move |_| state.with(|s| s.slots().is_set(label)));

    // 削除や送信後のリセットでスロットが空になったらURLを解放
    Effect::new(move |_| {
        if !is_set.get() {
            replace_preview(preview, None);
        }
    });
    on_cleanup(move || replace_preview(preview, None));

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            let url = Url::create_object_url_with_blob(&file).ok();
            read_image_file(file, move |image| {
                replace_preview(preview, url);
                state.update(|s| s.set_slot(label, image));
            });
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    let label_for = input_id.clone();

    view! {
        <div class="upload-slot">
            <label for=label_for class="slot-label">
                {label.title()}
                {label.is_required().then_some(" *")}
            </label>
            <div class="slot-dropzone">
                <Show
                    when=move || is_set.get() && preview.with(Option::is_some)
                    fallback=move || {
                        let input_id = input_id.clone();
                        view! {
                            <div class="slot-empty">
                                <div class="upload-icon">"📷"</div>
                                <label for=input_id.clone() class="slot-picker">
                                    <span>"Upload a file"</span>
                                    <input
                                        id=input_id.clone()
                                        type="file"
                                        accept="image/*"
                                        class="sr-only"
                                        on:change=on_change
                                    />
                                </label>
                                <p class="text-muted">"PNG, JPG, GIF up to 10MB"</p>
                            </div>
                        }
                    }
                >
                    <div class="slot-preview">
                        <img
                            src=move || preview.get().unwrap_or_default()
                            alt=format!("{} preview", label)
                        />
                        <button
                            class="remove-button"
                            title="Remove"
                            on:click=move |_| state.update(|s| s.clear_slot(label))
                        >
                            "✕"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// プレビューURLを差し替え、古いURLは解放する
fn replace_preview(preview: RwSignal<Option<String>>, url: Option<String>) {
    let Some(old) = preview.try_get_untracked() else {
        return;
    };
    if old == url {
        return;
    }
    if let Some(old) = old {
        let _ = Url::revoke_object_url(&old);
    }
    preview.try_set(url);
}

/// FileをImageFileとして読み込み、完了時にコールバックを呼ぶ
///
/// 読み込みに失敗した場合はコンソールに出力し、コールバックは呼ばない。
pub fn read_image_file<F>(file: File, on_loaded: F)
where
    F: FnOnce(ImageFile) + 'static,
{
    let file_name = file.name();
    let mime_type = match file.type_() {
        t if !t.is_empty() => t,
        _ => file_name
            .rsplit('.')
            .next()
            .and_then(mime_type_for_extension)
            .unwrap_or("application/octet-stream")
            .to_string(),
    };

    let Ok(reader) = FileReader::new() else {
        web_sys::console::error_1(&JsValue::from_str("FileReader is unavailable"));
        return;
    };

    let reader_clone = reader.clone();
    let mut on_loaded = Some(on_loaded);
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            let bytes = js_sys::Uint8Array::new(&result).to_vec();
            if let Some(callback) = on_loaded.take() {
                callback(ImageFile::new(file_name.clone(), mime_type.clone(), bytes));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let failed_name = file.name();
    let on_error = Closure::wrap(Box::new(move |ev: web_sys::ProgressEvent| {
        web_sys::console::error_2(
            &JsValue::from_str(&format!("Failed to read {}", failed_name)),
            &ev,
        );
    }) as Box<dyn FnMut(_)>);
    reader.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    on_error.forget();

    if let Err(e) = reader.read_as_array_buffer(&file) {
        web_sys::console::error_1(&e);
    }
}
