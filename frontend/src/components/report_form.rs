use crate::auth::use_auth;
use crate::components::toast::use_toaster;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use lostlinked::notify::Notification;
use lostlinked::report::{ReportField, ReportForm, SUBMIT_FAILED, submit_report, success_message};
use lostlinked_shared::{Category, ItemKind};
use lostlinked::{AppRoute, ClientError, InFlight};

/// 单个输入控件，值直接绑定到表单状态
fn field_input(
    field: ReportField,
    kind: ItemKind,
    form: ReadSignal<ReportForm>,
    set_form: WriteSignal<ReportForm>,
) -> impl IntoView {
    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_form.update(|f| f.set(field, value));
    };
    let value = move || form.with(|f| f.get(field));

    let control = match field {
        ReportField::Description => view! {
            <textarea
                id=field.key()
                name=field.key()
                rows="4"
                placeholder=field.placeholder()
                class="textarea textarea-bordered w-full"
                prop:value=value
                on:input=on_input
                required
            ></textarea>
        }
        .into_any(),
        ReportField::Category => view! {
            <select
                id=field.key()
                name=field.key()
                class="select select-bordered w-full"
                prop:value=value
                on:change=on_input
                required
            >
                {Category::ALL
                    .into_iter()
                    .map(move |c| view! {
                        <option value=c.as_str() selected=move || form.with(|f| f.category == c)>
                            {c.label()}
                        </option>
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        _ => {
            let input_type = if field == ReportField::Date { "date" } else { "text" };
            view! {
                <input
                    id=field.key()
                    name=field.key()
                    type=input_type
                    placeholder=field.placeholder()
                    class="input input-bordered w-full"
                    prop:value=value
                    on:input=on_input
                    required
                />
            }
            .into_any()
        }
    };

    view! {
        <div class="form-control">
            <label class="label" for=field.key()>
                <span class="label-text font-medium">{format!("{} *", field.label(kind))}</span>
            </label>
            {control}
        </div>
    }
}

/// 报告表单页，类型由路由决定
#[component]
pub fn ReportFormPage(kind: ItemKind) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();

    let (form, set_form) = signal(ReportForm::today());
    let (is_submitting, set_is_submitting) = signal(false);
    let submissions = StoredValue::new(InFlight::<ItemKind>::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let current = form.get_untracked();
        let api = auth.api();
        let inflight = submissions.get_value();
        set_is_submitting.set(true);

        spawn_local(async move {
            match submit_report(&api, &inflight, kind, &current).await {
                Ok(_) => {
                    toaster.success(success_message(kind));
                    router.navigate(AppRoute::report_success_redirect().to_path());
                }
                Err(ClientError::Busy(_)) => return,
                Err(e) => toaster.notify(Notification::from_error(&e, SUBMIT_FAILED)),
            }
            // 导航后组件可能已销毁
            set_is_submitting.try_set(false);
        });
    };

    let on_cancel = move |_| router.navigate(AppRoute::report_success_redirect().to_path());

    let banner_class = match kind {
        ItemKind::Lost => "alert alert-error alert-soft border-l-4 mb-6",
        ItemKind::Found => "alert alert-success alert-soft border-l-4 mb-6",
    };

    view! {
        <div class="container mx-auto px-4 py-8">
            <div class="max-w-2xl mx-auto">
                <div class=banner_class>
                    <div>
                        <h1 class="text-3xl font-bold">{format!("Report {} Item", kind.label())}</h1>
                        <p class="mt-1">
                            {format!("Fill out the form below to report a {} item", kind.as_str())}
                        </p>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-md">
                    <form class="card-body space-y-4" on:submit=on_submit>
                        {field_input(ReportField::ItemName, kind, form, set_form)}
                        {field_input(ReportField::Description, kind, form, set_form)}
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {field_input(ReportField::Category, kind, form, set_form)}
                            {field_input(ReportField::Date, kind, form, set_form)}
                        </div>
                        {field_input(ReportField::Location, kind, form, set_form)}
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {field_input(ReportField::Name, kind, form, set_form)}
                            {field_input(ReportField::Contact, kind, form, set_form)}
                        </div>

                        <div class="flex gap-4 pt-4">
                            <button
                                type="submit"
                                class="btn btn-primary flex-1"
                                disabled=move || is_submitting.get()
                            >
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                                } else {
                                    "Submit Report".into_any()
                                }}
                            </button>
                            <button type="button" class="btn btn-ghost" on:click=on_cancel>
                                "Cancel"
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
