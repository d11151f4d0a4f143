//! フィルタ（巻・年・件名・検索・並び順）のサイドバー

use cartas_common::filter::parse_leading_int;
use cartas_common::{FilterOptions, FilterState, Intent, SortMode, VolumeFilter};
use leptos::prelude::*;

/// 年セレクトの値（空は指定なし）
fn parse_year(value: &str) -> Option<i32> {
    if value.is_empty() {
        return None;
    }
    parse_leading_int(value).and_then(|y| i32::try_from(y).ok())
}

fn year_value(year: Option<i32>) -> String {
    year.map(|y| y.to_string()).unwrap_or_default()
}

#[component]
pub fn FiltersSidebar<FI>(
    options: Memo<FilterOptions>,
    filters: Memo<FilterState>,
    sort: Memo<SortMode>,
    search_input: ReadSignal<String>,
    set_search_input: WriteSignal<String>,
    on_intent: FI,
) -> impl IntoView
where
    FI: Fn(Intent) + 'static + Clone + Send + Sync,
{
    let (sidebar_open, set_sidebar_open) = signal(false);

    let submit_search = {
        let on_intent = on_intent.clone();
        move || on_intent(Intent::Search(search_input.get_untracked()))
    };

    let volume_radio = {
        let on_intent = on_intent.clone();
        move |value: String, label: String| {
            let on_intent = on_intent.clone();
            let volume = VolumeFilter::from_value(&value);
            let checked_volume = volume.clone();
            view! {
                <label class="filtro-opcao">
                    <input
                        type="radio"
                        name="volume"
                        value=value
                        prop:checked=move || filters.with(|f| f.volume == checked_volume)
                        on:change=move |_| on_intent(Intent::SetVolume(volume.clone()))
                    />
                    {label}
                </label>
            }
        }
    };

    let year_select = {
        let on_intent = on_intent.clone();
        move |id: &'static str, is_start: bool| {
            let on_intent = on_intent.clone();
            let current = move || filters.with(|f| if is_start { f.year_start } else { f.year_end });
            view! {
                <select
                    id=id
                    prop:value=move || year_value(current())
                    on:change=move |ev| {
                        let year = parse_year(&event_target_value(&ev));
                        on_intent(if is_start { Intent::SetYearStart(year) } else { Intent::SetYearEnd(year) });
                    }
                >
                    <option value="">"Todos"</option>
                    {move || {
                        options
                            .with(|o| o.years.clone())
                            .into_iter()
                            .map(|year| {
                                view! {
                                    <option value=year.to_string() selected=move || current() == Some(year)>
                                        {year}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            }
        }
    };

    let subject_list = {
        let on_intent = on_intent.clone();
        move || {
            options
                .with(|o| o.subjects.clone())
                .into_iter()
                .map(|subject| {
                    let on_intent = on_intent.clone();
                    let checked_subject = subject.clone();
                    let toggled_subject = subject.clone();
                    view! {
                        <label class="filtro-opcao">
                            <input
                                type="checkbox"
                                value=subject.clone()
                                prop:checked=move || filters.with(|f| f.subjects.contains(&checked_subject))
                                on:change=move |ev| {
                                    on_intent(Intent::ToggleSubject {
                                        subject: toggled_subject.clone(),
                                        checked: event_target_checked(&ev),
                                    })
                                }
                            />
                            {subject}
                        </label>
                    }
                })
                .collect_view()
        }
    };

    let volume_list = move || {
        let mut radios = vec![volume_radio("todos".to_string(), "Todos".to_string())];
        for volume in options.with(|o| o.volumes.clone()) {
            radios.push(volume_radio(volume.to_string(), format!("Volume {}", volume)));
        }
        radios
    };

    let on_sort = {
        let on_intent = on_intent.clone();
        move |ev: leptos::ev::Event| on_intent(Intent::SetSort(SortMode::from_value(&event_target_value(&ev))))
    };
    let on_search_key = {
        let submit_search = submit_search.clone();
        move |ev: leptos::ev::KeyboardEvent| {
            if ev.key() == "Enter" {
                submit_search();
            }
        }
    };
    let year_start_select = year_select("ano-inicio", true);
    let year_end_select = year_select("ano-fim", false);

    view! {
        <button class="filtros-toggle" on:click=move |_| set_sidebar_open.update(|o| *o = !*o)>
            "Filtros"
        </button>

        <aside id="filtros-sidebar" class="filtros-sidebar" class:active=move || sidebar_open.get()>
            <div class="filtro-grupo">
                <label for="busca-texto">"Buscar no texto"</label>
                <div class="busca-wrapper">
                    <input
                        type="text"
                        id="busca-texto"
                        placeholder="Palavra ou frase..."
                        prop:value=move || search_input.get()
                        on:input=move |ev| set_search_input.set(event_target_value(&ev))
                        on:keydown=on_search_key
                    />
                    <button id="btn-buscar" on:click=move |_| submit_search()>"Buscar"</button>
                </div>
            </div>

            <div class="filtro-grupo">
                <h3>"Volume"</h3>
                {volume_list}
            </div>

            <div class="filtro-grupo">
                <h3>"Ano"</h3>
                <div class="filtro-anos">
                    <label for="ano-inicio">"De"</label>
                    {year_start_select}
                    <label for="ano-fim">"Até"</label>
                    {year_end_select}
                </div>
            </div>

            <div class="filtro-grupo">
                <h3>"Assuntos"</h3>
                <div id="assuntos-lista">{subject_list}</div>
            </div>

            <div class="filtro-grupo">
                <label for="ordenar">"Ordenar por"</label>
                <select
                    id="ordenar"
                    prop:value=move || sort.get().as_value()
                    on:change=on_sort
                >
                    {SortMode::ALL
                        .into_iter()
                        .map(|mode| view! { <option value=mode.as_value()>{mode.label()}</option> })
                        .collect_view()}
                </select>
            </div>

            <button id="btn-limpar" class="btn btn-secondary" on:click=move |_| on_intent(Intent::ClearFilters)>
                "Limpar filtros"
            </button>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year(""), None);
        assert_eq!(parse_year("1962"), Some(1962));
        assert_eq!(parse_year("abc"), None);
    }

    #[test]
    fn test_year_value() {
        assert_eq!(year_value(None), "");
        assert_eq!(year_value(Some(2010)), "2010");
    }
}
