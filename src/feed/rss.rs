// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rss::{Channel, Guid, Item};

use super::model::{Episode, Feed};

/// Convert an assembled feed into an RSS channel
pub fn to_channel(feed: &Feed) -> Channel {
    let mut channel = Channel::default();
    channel.set_title(feed.title.as_str());
    channel.set_link(feed.link.as_str());
    channel.set_description(feed.description.as_str());
    channel.set_pub_date(feed.created.to_rfc2822());

    if let Some(image) = &feed.image {
        let mut rss_image = rss::Image::default();
        rss_image.set_url(image.url.as_str());
        rss_image.set_title(image.title.as_str());
        rss_image.set_link(image.link.as_str());
        channel.set_image(rss_image);
    }

    channel.set_items(feed.items.iter().map(to_item).collect::<Vec<_>>());
    channel
}

fn to_item(episode: &Episode) -> Item {
    let mut item = Item::default();
    item.set_title(episode.title.clone());
    item.set_link(episode.link.clone());
    item.set_pub_date(episode.created.to_rfc2822());

    if !episode.description.is_empty() {
        item.set_description(episode.description.clone());
    }

    let mut guid = Guid::default();
    guid.set_value(episode.id.as_str());
    guid.set_permalink(episode.id.starts_with("http"));
    item.set_guid(guid);

    if let Some(enclosure) = &episode.enclosure {
        let mut rss_enclosure = rss::Enclosure::default();
        rss_enclosure.set_url(enclosure.url.as_str());
        rss_enclosure.set_length(enclosure.length.to_string());
        rss_enclosure.set_mime_type(enclosure.mime_type.as_str());
        item.set_enclosure(rss_enclosure);
    }

    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_date;
    use crate::feed::{Enclosure, Image};

    fn make_feed() -> Feed {
        let mut feed = Feed::new("https://www.radiorus.ru/brand/57083/episodes");
        feed.title = "Аэростат".to_string();
        feed.description = "Программа Бориса Гребенщикова".to_string();
        feed.image = Some(Image {
            link: feed.link.clone(),
            url: "https://cdn.example/aerostat.jpg".to_string(),
            title: "Аэростат".to_string(),
        });
        feed.created = parse_date(&["1", "12", "2019", "10", "00"]);

        let mut with_audio = Episode::new("https://www.radiorus.ru/brand/57083/episodes/2");
        with_audio.title = "Эпизод 2".to_string();
        with_audio.enclosure = Some(Enclosure::audio("222"));
        with_audio.created = parse_date(&["24", "11", "2019", "14", "10"]);
        feed.add(with_audio);

        let mut without_audio = Episode::new("https://www.radiorus.ru/brand/57083/episodes/1");
        without_audio.title = "Эпизод 1".to_string();
        feed.add(without_audio);

        feed
    }

    #[test]
    fn channel_carries_programme_fields() {
        let channel = to_channel(&make_feed());

        assert_eq!(channel.title(), "Аэростат");
        assert_eq!(channel.link(), "https://www.radiorus.ru/brand/57083/episodes");
        assert_eq!(channel.description(), "Программа Бориса Гребенщикова");
        assert_eq!(channel.pub_date(), Some("Sun, 1 Dec 2019 10:00:00 +0300"));
        assert_eq!(
            channel.image().map(|i| i.url()),
            Some("https://cdn.example/aerostat.jpg")
        );
    }

    #[test]
    fn items_keep_order_and_ids() {
        let channel = to_channel(&make_feed());
        let guids: Vec<_> = channel
            .items()
            .iter()
            .map(|i| i.guid().map(|g| g.value().to_string()))
            .collect();

        assert_eq!(
            guids,
            vec![
                Some("http://www.radiorus.ru/brand/57083/episodes/2".to_string()),
                Some("http://www.radiorus.ru/brand/57083/episodes/1".to_string()),
            ]
        );
    }

    #[test]
    fn enclosure_only_when_present() {
        let channel = to_channel(&make_feed());
        let items = channel.items();

        let enclosure = items[0].enclosure().unwrap();
        assert_eq!(enclosure.url(), "https://audio.vgtrk.com/download?id=222");
        assert_eq!(enclosure.length(), "1024");
        assert_eq!(enclosure.mime_type(), "audio/mpeg");
        assert!(items[1].enclosure().is_none());
    }

    #[test]
    fn serialized_dates_are_moscow_time() {
        let xml = to_channel(&make_feed()).to_string();
        assert!(xml.contains("<pubDate>Sun, 24 Nov 2019 14:10:00 +0300</pubDate>"));
        assert!(xml.contains("<pubDate>Thu, 1 Jan 1970 00:00:00 +0300</pubDate>"));
    }
}
